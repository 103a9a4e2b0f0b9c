use clap::Parser;
use rootwalk_domain::CliOverrides;
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;
mod lookup;
mod output;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS lookup starting from the root servers")]
struct Cli {
    /// Domain names to look up
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,

    /// Debug logging (same as --log-level debug)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Referral and alias steps allowed per lookup
    #[arg(long)]
    max_hops: Option<usize>,

    /// Resolve repeated names again instead of reusing earlier results
    #[arg(long)]
    no_cache: bool,

    /// Print one JSON object per name
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        query_timeout_secs: cli.timeout,
        max_hops: cli.max_hops,
        cache_enabled: cli.no_cache.then_some(false),
        log_level: cli
            .log_level
            .clone()
            .or_else(|| cli.verbose.then(|| "debug".to_string())),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    let failed = lookup::lookup_names(
        &services.collect_records,
        &cli.names,
        cli.json,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .await?;

    debug!(names = cli.names.len(), failed = failed, "Done");

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
