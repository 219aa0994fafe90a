/// `print_nodes` - print out the nodes of a taxonomy.

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser};

use super::{finish, init_logging, TaxonomyArgs};
use crate::application::use_cases::PrintNodesUseCase;
use crate::shared::error::ToolError;

/// Options of the node printer
#[derive(Args, Debug, Clone)]
pub struct NodesConfig {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,
}

/// Standalone command line of `print_nodes`
#[derive(Parser, Debug)]
#[command(name = "print_nodes")]
#[command(version)]
#[command(about = "Print out the nodes of a taxonomy", long_about = None)]
pub struct NodesCli {
    #[command(flatten)]
    pub config: NodesConfig,
}

/// Runs `print_nodes`
pub fn run() -> ExitCode {
    let cli = NodesCli::parse();
    init_logging(cli.config.taxonomy.log_level());
    execute(&cli.config)
}

pub fn execute(config: &NodesConfig) -> ExitCode {
    finish(print(config))
}

fn print(config: &NodesConfig) -> Result<u8, ToolError> {
    let taxonomy = config.taxonomy.load()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = PrintNodesUseCase::new().execute(&taxonomy, &mut out)?;
    out.flush()?;

    tracing::debug!("Printed {} nodes", written);
    Ok(0)
}
