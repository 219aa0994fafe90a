/// Umbrella entry point exposing every tool as a subcommand
///
/// This serves as a thin wrapper that delegates to the interfaces layer.
/// The standalone tools live in `src/bin/`.

use std::process::ExitCode;

use wikiproject_taxonomy::interfaces::cli;

fn main() -> ExitCode {
    cli::run()
}
