/// CLI Interface Module
///
/// Command-line front ends for the taxonomy tools.
///
/// ## Responsibilities
/// - Parse command-line arguments (usage errors exit with status 2 before any I/O)
/// - Initialize logging to stderr
/// - Load the taxonomy and build the API client and worker pool
/// - Map the outcome to a process exit status
///
/// ## Tools
/// - `check`: `check_wikiprojects`
/// - `templates`: `fetch_wikiproject_templates`
/// - `nodes`: `print_nodes`

pub mod check;
pub mod nodes;
pub mod templates;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::application::services::WikiProjectLookup;
use crate::domain::taxonomy::Taxonomy;
use crate::infrastructure::mediawiki::MediaWikiClient;
use crate::infrastructure::taxonomy_loader::load_taxonomy;
use crate::infrastructure::worker_pool::WorkerPool;
use crate::shared::config::{ApiConfig, DEFAULT_HOST, DEFAULT_THREADS};
use crate::shared::error::{ApiError, TaxonomyError, ToolError};

/// Exit status when the run found issues or failed
pub const EXIT_ISSUES: u8 = 1;

/// Taxonomy input and logging options shared by every tool
#[derive(Args, Debug, Clone)]
pub struct TaxonomyArgs {
    /// A YAML file containing a partial or whole taxonomy; multiple files are merged
    #[arg(value_name = "TAXON", required = true)]
    pub taxon: Vec<PathBuf>,

    /// Print debug log information while running
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Same as --debug
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl TaxonomyArgs {
    pub fn log_level(&self) -> &'static str {
        if self.debug || self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Loads and merges the taxonomy files in command-line order
    pub fn load(&self) -> Result<Taxonomy, TaxonomyError> {
        tracing::info!("Loading taxonomy from {:?}", self.taxon);
        load_taxonomy(&self.taxon)
    }
}

/// Options of the tools that query the MediaWiki API
#[derive(Args, Debug, Clone)]
pub struct RemoteArgs {
    /// An email address included in the User-Agent of requests to the MediaWiki API
    #[arg(long, value_name = "ADDRESS")]
    pub ua_email: Option<String>,

    /// How many threads to run in parallel (0 = one per CPU core)
    #[arg(short, long, value_name = "NUM", default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// MediaWiki host to query
    #[arg(long, value_name = "URL", default_value = DEFAULT_HOST)]
    pub host: String,
}

impl RemoteArgs {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.host.clone()).with_contact(self.ua_email.clone())
    }

    pub fn worker_pool(&self) -> WorkerPool {
        WorkerPool::with_workers(self.threads)
    }

    pub fn lookup(&self) -> Result<WikiProjectLookup<MediaWikiClient>, ApiError> {
        let client = MediaWikiClient::new(&self.api_config())?;
        tracing::debug!("Using MediaWiki API at {}", client.endpoint());
        Ok(WikiProjectLookup::new(client))
    }
}

/// Umbrella command exposing every tool as a subcommand
#[derive(Parser, Debug)]
#[command(name = "wikiproject-taxonomy")]
#[command(version)]
#[command(about = "Check and report on a WikiProject taxonomy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the WikiProjects in a taxonomy exist
    Check(check::CheckConfig),

    /// Map WikiProjects to their templates
    Templates(templates::TemplatesConfig),

    /// Print the nodes of a taxonomy
    Nodes(nodes::NodesConfig),
}

impl Command {
    fn taxonomy_args(&self) -> &TaxonomyArgs {
        match self {
            Command::Check(config) => &config.taxonomy,
            Command::Templates(config) => &config.taxonomy,
            Command::Nodes(config) => &config.taxonomy,
        }
    }
}

/// Runs the umbrella CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.command.taxonomy_args().log_level());

    match &cli.command {
        Command::Check(config) => check::execute(config),
        Command::Templates(config) => templates::execute(config),
        Command::Nodes(config) => nodes::execute(config),
    }
}

/// Initializes logging to stderr
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},reqwest=warn,hyper=warn,hyper_util=warn", level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Converts a tool outcome into a process exit code
pub fn finish(result: Result<u8, ToolError>) -> ExitCode {
    ExitCode::from(exit_status_of(result))
}

/// Exit status of a tool outcome; a runtime failure is logged and exits 1
pub fn exit_status_of(result: Result<u8, ToolError>) -> u8 {
    match result {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("{}", e);
            EXIT_ISSUES
        }
    }
}
