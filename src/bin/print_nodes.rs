use std::process::ExitCode;

use wikiproject_taxonomy::interfaces::cli::nodes;

fn main() -> ExitCode {
    nodes::run()
}
