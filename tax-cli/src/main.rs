use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use tax_cli::{Config, Console, Session, app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// 2009 U.S. federal income tax calculator.
///
/// Without arguments, runs an interactive session that asks for a filing
/// status and taxable income. With `--status` and `--income`, prints a
/// single result and exits.
#[derive(Debug, Parser)]
#[command(name = "tax-calculator", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `debug`), overriding `RUST_LOG` and the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Filing status code: 0 Single, 1 Married Filing Jointly,
    /// 2 Married Filing Separately, 3 Head of Household.
    #[arg(long, requires = "income")]
    status: Option<String>,

    /// Taxable income, e.g. `52,000` or `$52000.00`.
    #[arg(long, requires = "status", allow_hyphen_values = true)]
    income: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    logging::init(&config.logging, cli.log_level.as_deref())?;
    debug!(?config, "configuration loaded");

    if let (Some(status), Some(income)) = (&cli.status, &cli.income) {
        app::calculate_once(status, income, &mut io::stdout().lock())?;
        return Ok(());
    }

    let end = Session::new(Console::stdin(), io::stdout(), config.display)
        .run()
        .await;
    info!(?end, "exiting");

    Ok(())
}
