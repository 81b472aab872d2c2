//! Job-board crawler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use job_crawler::{
    error::Result,
    models::{Config, Freshness, ReportFormat},
    pipeline,
    services::PostedTime,
    storage::{LocalStorage, ReportStorage},
    utils::http::HttpFetcher,
};

/// job-crawler - Job board listing crawler
#[derive(Parser, Debug)]
#[command(
    name = "job-crawler",
    version,
    about = "Crawls job-board listings into a freshness-annotated report"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl index pages and their listings, then print and save the report
    Crawl {
        /// Index page URL without the page parameter
        #[arg(long)]
        base_url: Option<String>,

        /// Number of index pages to crawl
        #[arg(short, long)]
        pages: Option<u32>,

        /// File to save the report to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report file format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Do not print the report table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Show how a relative posted-time text is interpreted
    ParseTime {
        /// Text such as "Today: 3h ago" or "5 days ago"
        text: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Crawl {
            base_url,
            pages,
            output,
            format,
            quiet,
        } => {
            let mut config = Config::load_or_default(&cli.config);
            if let Some(url) = base_url {
                config.base_url = url;
            }
            if let Some(pages) = pages {
                config.num_pages = pages;
            }
            if let Some(path) = output {
                config.output.path = Some(path.display().to_string());
            }
            if let Some(format) = format {
                config.output.format = format.into();
            }
            if quiet {
                config.output.console = false;
            }

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            let fetcher = Arc::new(HttpFetcher::new(&config.crawler)?);
            let storage = config
                .output
                .path
                .as_ref()
                .map(|path| LocalStorage::new(path, config.output.format));

            pipeline::run_crawler(
                &config,
                fetcher,
                storage.as_ref().map(|s| s as &dyn ReportStorage),
                Local::now(),
            )
            .await?;
        }

        Command::Validate => {
            log::info!("Validating {}...", cli.config.display());

            let config = Config::load(&cli.config)?;
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            log::info!("✓ Config OK");
            log::info!("    base_url: {}", config.base_url);
            log::info!("    num_pages: {}", config.num_pages);
            log::info!(
                "    hot_days: {}, actively_hiring_days: {}",
                config.freshness.hot_days,
                config.freshness.actively_hiring_days
            );
            match &config.output.path {
                Some(path) => log::info!("    output: {} ({:?})", path, config.output.format),
                None => log::info!("    output: console only"),
            }
        }

        Command::ParseTime { text } => {
            let config = Config::load_or_default(&cli.config);
            let now = Local::now();
            let parsed = PostedTime::parse(&text);
            let freshness = Freshness::derive(parsed.resolve(now), now, &config.freshness);

            println!("Interpreted as: {}", parsed);
            println!(
                "Posted date:    {}",
                freshness.posted_date.format("%Y-%m-%d %H:%M:%S")
            );
            println!("Days since:     {}", freshness.days_since_posted);
            println!("Status:         {}", freshness.status);
            println!("Actively hiring: {}", freshness.actively_hiring);
        }
    }

    Ok(())
}
