//! Odds Formatter - Command Line Entry Point
//!
//! Converts a single price given as decimal, fractional or moneyline odds and
//! prints every representation, or benchmarks the fractional strategies.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use odds_formatter::common::bench::SpeedTest;
use odds_formatter::config::load_config;
use odds_formatter::config::types::{ConversionConfig, FractionalStrategy, LadderConfig};
use odds_formatter::{Odds, OddsFactory};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(name = "odds", author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "odds.toml", global = true)]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Fractional strategy; overrides the config file
    #[arg(long, value_enum, global = true)]
    strategy: Option<StrategyArg>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert decimal odds, e.g. `2.50`
    Decimal { value: String },
    /// Convert fractional odds, e.g. `5/2` or `5-2`
    Fractional { value: String },
    /// Convert moneyline odds, e.g. `+150` or `-200`
    Moneyline {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Time decimal conversion for every fractional strategy
    Bench {
        /// Iterations per strategy
        #[arg(short, long)]
        iterations: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    ContinuedFraction,
    StandardLadder,
    CustomLadder,
}

impl From<StrategyArg> for FractionalStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ContinuedFraction => FractionalStrategy::ContinuedFraction,
            StrategyArg::StandardLadder => FractionalStrategy::StandardLadder,
            StrategyArg::CustomLadder => FractionalStrategy::CustomLadder,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let mut config = load_config(Some(&args.config))
        .with_context(|| format!("failed to load configuration from {}", args.config))?;

    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.settings.log_level.clone());
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(strategy) = args.strategy {
        config.conversion.strategy = strategy.into();
    }

    info!(
        config = %args.config,
        strategy = ?config.conversion.strategy,
        "Starting odds formatter"
    );

    let factory = OddsFactory::from_config(&config.conversion, &config.ladder)?;

    let result = match &args.command {
        Command::Decimal { value } => factory.from_decimal(value),
        Command::Fractional { value } => factory.from_fractional_str(value),
        Command::Moneyline { value } => factory.from_moneyline(value),
        Command::Bench { iterations } => {
            let iterations = iterations.unwrap_or(config.settings.bench_iterations);
            run_bench(&config.conversion, &config.ladder, iterations)?;
            return Ok(());
        }
    };

    let odds = result.map_err(|err| {
        warn!(error = %err, invalid_odds = err.is_invalid_odds(), "Conversion rejected");
        err
    })?;

    print_odds(&odds, args.json)
}

fn print_odds(odds: &Odds, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(odds)?);
    } else {
        println!("Decimal:     {}", odds.decimal());
        println!("Fractional:  {}", odds.fractional());
        println!("Moneyline:   {}", odds.moneyline());
        println!("Probability: {}%", odds.probability());
    }
    Ok(())
}

fn run_bench(conversion: &ConversionConfig, ladder: &LadderConfig, iterations: usize) -> Result<()> {
    info!(iterations, "Benchmarking decimal conversion over 1.01..=1.99");

    let strategies = [
        FractionalStrategy::ContinuedFraction,
        FractionalStrategy::StandardLadder,
        FractionalStrategy::CustomLadder,
    ];

    let mut results = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let conversion = ConversionConfig {
            strategy,
            ..conversion.clone()
        };
        let factory = OddsFactory::from_config(&conversion, ladder)?;
        let stats = SpeedTest::bench_factory(factory.strategy_name(), &factory, iterations);
        println!("{}", stats);
        results.push(stats);
    }

    if let Some(baseline) = results.first() {
        println!("[Comparison] relative to {}", baseline.name);
        for stats in &results {
            println!("  {:<20} {:.2}x", stats.name, stats.relative_to(baseline));
        }
    }

    Ok(())
}
