use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use configuration::{load_config, Config};
use meridian::{run_correlation, run_indicators};
use report::{correlation_table, indicator_table, ChartExporter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Technical indicators and news-sentiment correlation for a daily stock history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to `config.toml` when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory that receives the exported files.
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute moving averages, RSI, and MACD from a price table.
    Indicators(IndicatorsArgs),
    /// Correlate daily returns with daily headline sentiment.
    Correlate(CorrelateArgs),
}

#[derive(Args)]
struct IndicatorsArgs {
    /// Price CSV with at least `Date` and `Close` columns.
    #[arg(long)]
    prices: Option<PathBuf>,
}

#[derive(Args)]
struct CorrelateArgs {
    /// Price CSV with at least `Date` and `Close` columns.
    #[arg(long)]
    prices: Option<PathBuf>,

    /// News CSV with `date` and `headline` columns.
    #[arg(long)]
    news: Option<PathBuf>,
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(output) = cli.output {
        config.render.output_dir = output;
    }

    match cli.command {
        Commands::Indicators(args) => {
            if let Some(prices) = args.prices {
                config.data.prices_path = prices;
            }
            handle_indicators(&config)
        }
        Commands::Correlate(args) => {
            if let Some(prices) = args.prices {
                config.data.prices_path = prices;
            }
            if let Some(news) = args.news {
                config.data.news_path = news;
            }
            handle_correlate(&config)
        }
    }
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_indicators(config: &Config) -> Result<()> {
    println!("\n=== Technical Indicators ===\n");
    let report = run_indicators(config)?;

    println!("{}", indicator_table(&report, config.render.console_tail_rows));
    if let Some(zone) = report.latest_rsi_zone() {
        println!("Latest RSI reading is {zone}.");
    }
    let (overbought, neutral, oversold) = report.rsi_zone_counts();
    println!(
        "RSI days: {overbought} overbought, {neutral} neutral, {oversold} oversold."
    );

    let exporter = ChartExporter::new(config.render.clone());
    let path = exporter
        .write_indicators(&report)
        .context("Failed to export indicator series")?;
    println!("\nIndicator series saved to: {}", path.display());
    Ok(())
}

fn handle_correlate(config: &Config) -> Result<()> {
    println!("\n=== Stock & News Analysis ===\n");
    let run = run_correlation(config)?;

    println!("{}", correlation_table(&run.result));
    println!("\n{}.", run.result.interpretation());

    let exporter = ChartExporter::new(config.render.clone());
    let overlay = exporter
        .write_returns_vs_sentiment(&run.joined, &run.events)
        .context("Failed to export returns vs sentiment series")?;
    let summary = exporter
        .write_correlation(&run.result)
        .context("Failed to export correlation result")?;
    println!("\nSeries saved to: {}", overlay.display());
    println!("Result saved to: {}", summary.display());
    Ok(())
}
