use std::process::ExitCode;

use wikiproject_taxonomy::interfaces::cli::templates;

fn main() -> ExitCode {
    templates::run()
}
