/// Use Cases - one per tool
///
/// Each use case takes an already loaded taxonomy, does its work and
/// returns a report; printing and exit codes are left to the CLI.
///
/// ## Available Use Cases
/// - `CheckWikiProjectsUseCase`: Verifies every WikiProject page exists and is substantial
/// - `FetchTemplatesUseCase`: Maps WikiProjects to their template names
/// - `PrintNodesUseCase`: Prints the category outline

pub mod check_wikiprojects;
pub mod fetch_templates;
pub mod print_nodes;

// Re-export key types
pub use check_wikiprojects::{CheckEntry, CheckReport, CheckWikiProjectsUseCase};
pub use fetch_templates::{format_template_line, FetchTemplatesUseCase, TemplateEntry, TemplateReport};
pub use print_nodes::PrintNodesUseCase;
