/// `fetch_wikiproject_templates` - map WikiProjects to their templates.
///
/// Prints one `name: ["Template", ...]` line per WikiProject that has at
/// least one template.

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser};

use super::{finish, init_logging, RemoteArgs, TaxonomyArgs};
use crate::application::use_cases::FetchTemplatesUseCase;
use crate::shared::error::ToolError;

/// Options of the template fetcher
#[derive(Args, Debug, Clone)]
pub struct TemplatesConfig {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    #[command(flatten)]
    pub remote: RemoteArgs,
}

/// Standalone command line of `fetch_wikiproject_templates`
#[derive(Parser, Debug)]
#[command(name = "fetch_wikiproject_templates")]
#[command(version)]
#[command(about = "Generate a mapping between WikiProjects and their templates", long_about = None)]
pub struct TemplatesCli {
    #[command(flatten)]
    pub config: TemplatesConfig,
}

/// Runs `fetch_wikiproject_templates`
pub fn run() -> ExitCode {
    let cli = TemplatesCli::parse();
    init_logging(cli.config.taxonomy.log_level());
    execute(&cli.config)
}

pub fn execute(config: &TemplatesConfig) -> ExitCode {
    finish(fetch(config))
}

fn fetch(config: &TemplatesConfig) -> Result<u8, ToolError> {
    let taxonomy = config.taxonomy.load()?;
    let lookup = config.remote.lookup()?;
    let pool = config.remote.worker_pool();

    let report = FetchTemplatesUseCase::new(&lookup, &pool).execute(&taxonomy)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;

    Ok(0)
}
