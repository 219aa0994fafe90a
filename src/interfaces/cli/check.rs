/// `check_wikiprojects` - check the WikiProjects in a taxonomy to make sure
/// that they exist.
///
/// Exits with status 1 if any WikiProject page is missing, a redirect, very
/// short, or could not be looked up.

use std::process::ExitCode;

use clap::{Args, Parser};

use super::{finish, init_logging, RemoteArgs, TaxonomyArgs, EXIT_ISSUES};
use crate::application::use_cases::CheckWikiProjectsUseCase;
use crate::shared::config::DEFAULT_MIN_LENGTH;
use crate::shared::error::ToolError;

/// Options of the existence checker
#[derive(Args, Debug, Clone)]
pub struct CheckConfig {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    #[command(flatten)]
    pub remote: RemoteArgs,

    /// Pages shorter than this many characters are reported as very short
    #[arg(long, value_name = "CHARS", default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: u64,
}

/// Standalone command line of `check_wikiprojects`
#[derive(Parser, Debug)]
#[command(name = "check_wikiprojects")]
#[command(version)]
#[command(about = "Check the WikiProjects in a taxonomy to make sure that they exist", long_about = None)]
pub struct CheckCli {
    #[command(flatten)]
    pub config: CheckConfig,
}

/// Runs `check_wikiprojects`
pub fn run() -> ExitCode {
    let cli = CheckCli::parse();
    init_logging(cli.config.taxonomy.log_level());
    execute(&cli.config)
}

pub fn execute(config: &CheckConfig) -> ExitCode {
    finish(check(config))
}

fn check(config: &CheckConfig) -> Result<u8, ToolError> {
    let taxonomy = config.taxonomy.load()?;
    let lookup = config.remote.lookup()?;
    let pool = config.remote.worker_pool();

    let report = CheckWikiProjectsUseCase::new(&lookup, &pool)
        .with_min_length(config.min_length)
        .execute(&taxonomy)?;

    Ok(exit_status(report.issues()))
}

/// 0 when every WikiProject checked out, 1 otherwise
pub fn exit_status(issues: usize) -> u8 {
    if issues > 0 {
        EXIT_ISSUES
    } else {
        0
    }
}
