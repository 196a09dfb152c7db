//! # Qvault - Quantum Vault Console
//!
//! The main binary for the Qvault warehouse simulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              apps/qvault (THE BINARY)           │
//! │                                                 │
//! │  ┌─────────────┐         ┌──────────────────┐  │
//! │  │  Console    │         │  Entropy sources │  │
//! │  │  (REPL)     │         │  (rand)          │  │
//! │  └──────┬──────┘         └────────┬─────────┘  │
//! │         │                         │            │
//! │         └──────────┬──────────────┘            │
//! │                    ▼                           │
//! │            ┌───────────────┐                   │
//! │            │  qvault-core  │                   │
//! │            │  (THE LOGIC)  │                   │
//! │            └───────────────┘                   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive session
//! qvault
//!
//! # Reproducible spawns, JSON inventory listings, no banner
//! qvault --seed 42 --json-mode --quiet
//! ```

mod console;
mod entropy;

use clap::Parser;
use console::Console;
use entropy::{SeededEntropy, ThreadEntropy};
use qvault_core::RandomSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Qvault - Quantum Vault Console
///
/// Interactive warehouse simulation: spawn, inspect, analyze, and cool
/// quantum objects until the shift ends or something detonates.
#[derive(Parser, Debug)]
#[command(name = "qvault")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Suppress banner output
    #[arg(short, long)]
    quiet: bool,

    /// Seed for deterministic spawning (defaults to OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Render inventory listings as JSON (for programmatic access)
    #[arg(long)]
    json_mode: bool,
}

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — QVAULT_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("QVAULT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "qvault=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = Cli::parse();

    if !cli.quiet {
        print_banner();
    }

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededEntropy::from_seed(seed)),
        None => Box::new(ThreadEntropy::default()),
    };

    let mut console = Console::new(rng, cli.json_mode);
    if let Err(e) = console.run() {
        tracing::error!("Console I/O error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Qvault startup banner.
fn print_banner() {
    println!(
        r"
╔══════════════════════════════════════════════════════════╗
║     OMEGA SECTOR - QUANTUM DATA VAULT                    ║
║     Welcome, Shift Supervisor!                           ║
╚══════════════════════════════════════════════════════════╝

  Qvault v{}
",
        env!("CARGO_PKG_VERSION")
    );
}
