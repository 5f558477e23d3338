use clap::Parser;
use rootwalk_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version = "0.1.0")]
#[command(about = "Rootwalk - iterative DNS lookups starting from the root servers")]
struct Cli {
    /// Names to look up
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,

    /// Trace every query of the referral walk
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Bound on nested referrals, nameserver lookups and CNAME restarts
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Print one JSON object per name instead of host-style lines
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match (cli.log_level, cli.verbose) {
        (Some(level), _) => Some(level),
        (None, true) => Some("debug".to_string()),
        (None, false) => None,
    };

    let cli_overrides = CliOverrides {
        query_timeout_ms: cli.timeout_ms,
        max_depth: cli.max_depth,
        log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let mut services = di::DnsServices::new(&config);

    for name in &cli.names {
        let records = match services.lookup.execute(name).await {
            Ok(records) => records,
            Err(e) => {
                error!(name = %name, error = %e, "Lookup failed");
                continue;
            }
        };

        if cli.json {
            println!("{}", output::json_line(name, &records)?);
        } else {
            for line in output::host_lines(&records) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
