//! Tools for checking and reporting on a WikiProject taxonomy.
//!
//! A taxonomy is a tree of topic categories loaded from YAML files whose
//! leaves are WikiProject names. The tools walk it and query a MediaWiki
//! API once per leaf on a fixed-size worker pool.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;
