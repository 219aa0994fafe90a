/// Interfaces Layer - External Entry Points
///
/// Command-line front ends of the three tools. Each binary in `src/bin/`
/// and the umbrella binary in `main.rs` delegate here.
///
/// ## Modules
/// - `cli`: Argument parsing, logging setup, exit codes

pub mod cli;
