//! Smarkets liquidity scout entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smarkets_scout::catalog::SmarketsClient;
use smarkets_scout::config::Config;
use smarkets_scout::quotes::{HttpQuoteProber, QuoteProber};
use smarkets_scout::scanner::{scan_exchange, ScanOutcome};

/// Smarkets liquidity scout.
#[derive(Parser, Debug)]
#[command(name = "smarkets-scout")]
#[command(about = "Finds the first Smarkets contract with a two-sided order book")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full liquidity scan once (default).
    Scan,

    /// Check configuration validity.
    CheckConfig,

    /// Fetch the events listing and print the catalog shape.
    ListEvents,

    /// Probe a single contract's order book.
    Probe {
        /// Market identifier.
        market_id: String,
        /// Contract identifier.
        contract_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("smarkets_scout=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::ListEvents) => cmd_list_events().await,
        Some(Command::Probe {
            market_id,
            contract_id,
        }) => cmd_probe(&market_id, &contract_id).await,
        Some(Command::Scan) | None => cmd_scan().await,
    }
}

/// Load and validate configuration.
fn load_config() -> anyhow::Result<Config> {
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration load failed: {}", e)
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    Ok(config)
}

/// Run the full liquidity scan once.
async fn cmd_scan() -> anyhow::Result<()> {
    let config = load_config()?;

    info!("Configuration loaded successfully");
    info!("API base: {}", config.api_base());
    info!(
        "Listing filter: state={} limit={}",
        config.event_state, config.event_limit
    );

    let client = SmarketsClient::new(&config);

    let outcome = match scan_exchange(&client).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Fatal catalog error: {}", e);
            println!("======================================================================");
            println!("SCAN ABORTED - CATALOG FETCH FAILED");
            println!("  Error: {}", e);
            println!("======================================================================");
            return Err(anyhow::anyhow!("catalog fetch failed: {}", e));
        }
    };

    match outcome {
        ScanOutcome::Found(found) => {
            println!("======================================================================");
            println!("FIRST LIQUID CONTRACT FOUND");
            println!("----------------------------------------------------------------------");
            println!("  Event:    {}", found.event_name);
            println!("  Market:   {} ({})", found.market_name, found.contract_name);
            println!("  Market ID / Contract ID: {} / {}", found.snapshot.market_id, found.snapshot.contract_id);
            println!("----------------------------------------------------------------------");
            println!(
                "  Best Bid (SELL price): {} @ Volume: {}",
                found.snapshot.bid, found.snapshot.bid_volume
            );
            println!(
                "  Best Ask (BUY price):  {} @ Volume: {}",
                found.snapshot.ask, found.snapshot.ask_volume
            );
            println!("======================================================================");
        }
        ScanOutcome::NotFound { examined } => {
            println!("======================================================================");
            println!("NO LIQUID CONTRACT FOUND");
            println!("  Contracts examined: {}", examined);
            println!("======================================================================");
        }
    }

    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SMARKETS SCOUT - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  API Base: {}", config.api_base());
    println!("  Event State Filter: {}", config.event_state);
    println!("  Event Limit: {}", config.event_limit);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("  Probe Timeout: {}ms", config.probe_timeout_ms);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Fetch the events listing and print the catalog shape without probing.
async fn cmd_list_events() -> anyhow::Result<()> {
    let config = load_config()?;
    let client = SmarketsClient::new(&config);

    println!("======================================================================");
    println!("SMARKETS SCOUT - EVENTS LISTING");
    println!("======================================================================");

    let events = client
        .list_events()
        .await
        .map_err(|e| anyhow::anyhow!("catalog fetch failed: {}", e))?;

    if events.is_empty() {
        println!("Listing returned no events.");
        println!("======================================================================");
        return Ok(());
    }

    let mut total_markets = 0usize;
    let mut total_contracts = 0usize;

    for event in &events {
        let contracts: usize = event.markets.iter().map(|m| m.contracts.len()).sum();
        total_markets += event.markets.len();
        total_contracts += contracts;

        println!(
            "  {} ({} markets, {} contracts): {}",
            event.id,
            event.markets.len(),
            contracts,
            event.name
        );
    }

    println!("----------------------------------------------------------------------");
    println!(
        "Total: {} events, {} markets, {} contracts",
        events.len(),
        total_markets,
        total_contracts
    );
    println!("======================================================================");

    Ok(())
}

/// Probe a single contract's order book.
async fn cmd_probe(market_id: &str, contract_id: &str) -> anyhow::Result<()> {
    let config = load_config()?;
    let client = SmarketsClient::new(&config);
    let prober = HttpQuoteProber::new(client);

    println!("======================================================================");
    println!("SMARKETS SCOUT - SINGLE CONTRACT PROBE");
    println!("  Market ID:   {}", market_id);
    println!("  Contract ID: {}", contract_id);
    println!("======================================================================");

    match prober.probe(market_id, contract_id).await {
        Ok(Some(snapshot)) => {
            println!("LIQUID");
            println!(
                "  Best Bid (SELL price): {} @ Volume: {}",
                snapshot.bid, snapshot.bid_volume
            );
            println!(
                "  Best Ask (BUY price):  {} @ Volume: {}",
                snapshot.ask, snapshot.ask_volume
            );
        }
        Ok(None) => {
            println!("NO LIQUIDITY");
            println!("  Order book is empty, one-sided, or the contract is closed.");
        }
        Err(e) => {
            println!("PROBE FAILED");
            println!("  Error: {}", e);
            println!("======================================================================");
            return Err(anyhow::anyhow!("probe failed: {}", e));
        }
    }

    println!("======================================================================");

    Ok(())
}
