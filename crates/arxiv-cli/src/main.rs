//! arXiv CLI - Entry Point
//!
//! Exit codes: 0 success, 2 usage error or unknown identifier,
//! 3 destination exists without `--force`, 1 anything else.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_cli::commands::{self, AbstractArgs, DownloadArgs, SearchArgs};
use arxiv_cli::config::{Config, api};
use arxiv_cli::models::{ClientOptions, SearchQuery, SortCriterion, SortOrder};
use arxiv_cli::{ArxivClient, CommandError};

#[derive(Parser, Debug)]
#[command(name = "arxiv-cli")]
#[command(about = "arXiv API helper (search / abstract / download)")]
#[command(version)]
struct Cli {
    /// arXiv query endpoint
    #[arg(long, global = true, default_value = api::QUERY_URL, env = "ARXIV_API_URL")]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search papers by keyword/query
    Search {
        /// arXiv query string (e.g. 'all:whisper AND cat:cs.CL')
        #[arg(long)]
        query: String,

        /// Max number of results
        #[arg(long, default_value_t = 10)]
        max_results: usize,

        /// Sort criterion
        #[arg(long, value_enum, default_value_t = SortCriterion::Relevance)]
        sort_by: SortCriterion,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortOrder::Descending)]
        sort_order: SortOrder,

        /// Client page size (clamped to 1..=100)
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        page_size: i64,

        /// Delay between requests in seconds
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        delay_seconds: f64,

        /// Retry count
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        retries: i64,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Get paper abstract by arXiv ID
    Abstract {
        /// arXiv ID (e.g. 2401.01234 or 2401.01234v2)
        #[arg(long)]
        id: String,

        /// Retry count
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        retries: i64,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Download paper PDF by arXiv ID
    Download {
        /// arXiv ID (e.g. 2401.01234)
        #[arg(long)]
        id: String,

        /// Output directory (default: current dir)
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// Output file path
        #[arg(long)]
        outfile: Option<PathBuf>,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,

        /// Retry count
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        retries: i64,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries command output only.
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<Result<String, CommandError>> {
    let config = Config::with_api_url(&cli.api_url)?;

    let outcome = match cli.command {
        Command::Search {
            query,
            max_results,
            sort_by,
            sort_order,
            page_size,
            delay_seconds,
            retries,
            json,
        } => {
            let options = ClientOptions::new(page_size, delay_seconds, retries);
            let client = ArxivClient::new(config.with_options(options))?;
            let args = SearchArgs {
                query: SearchQuery::new(query, max_results).sorted(sort_by, sort_order),
                json,
            };
            commands::search(&client, &args).await
        }
        Command::Abstract { id, retries, json } => {
            let client = ArxivClient::new(config.with_options(ClientOptions::with_retries(retries)))?;
            commands::fetch_abstract(&client, &AbstractArgs { id, json }).await
        }
        Command::Download { id, outdir, outfile, force, retries } => {
            let client = ArxivClient::new(config.with_options(ClientOptions::with_retries(retries)))?;
            let args = DownloadArgs { id, outdir, outfile, force };
            commands::download(&client, &args).await
        }
    };

    Ok(outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "Starting arxiv-cli");

    match run(cli).await {
        Ok(Ok(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
