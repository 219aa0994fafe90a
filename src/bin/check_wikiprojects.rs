use std::process::ExitCode;

use wikiproject_taxonomy::interfaces::cli::check;

fn main() -> ExitCode {
    check::run()
}
