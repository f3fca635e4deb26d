//! Pulse check service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pulse_check::api::{create_router, AppState};
use pulse_check::config::Config;
use pulse_check::metrics;
use pulse_check::pulse::{CheckPulseUseCase, InMemoryVitalsRepository, PulseOutcome, UseCase};
use pulse_check::utils::shutdown_signal;

/// Layered pulse check service.
#[derive(Parser, Debug)]
#[command(name = "pulse-check")]
#[command(about = "Pulse check service built on a use case / repository / endpoint layout")]
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
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the pulse check once and exit.
    Check {
        /// Input handed to the use case (overrides DEFAULT_INPUT).
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let config = Config::load()?;

    // Initialize logging
    let filter = if args.verbose || config.verbose {
        EnvFilter::new("pulse_check=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    if config.log_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    // Handle subcommands
    match args.command {
        Some(Command::Serve { port }) => cmd_serve(config, port).await,
        Some(Command::Check { input }) => cmd_check(config, input).await,
        Some(Command::CheckConfig) => cmd_check_config(config),
        None => cmd_serve(config, None).await,
    }
}

/// Run the HTTP server until Ctrl-C or SIGTERM.
async fn cmd_serve(config: Config, port: Option<u16>) -> anyhow::Result<()> {
    config.validate()?;

    let shutdown = CancellationToken::new();
    let mut state = AppState::in_memory().with_shutdown(shutdown.clone());

    if config.metrics_enabled {
        state = state.with_metrics(metrics::install_recorder()?);
        info!("Prometheus metrics exposed on /metrics");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port.unwrap_or(config.port)));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the pulse check once against the in-memory repository.
async fn cmd_check(config: Config, input: Option<String>) -> anyhow::Result<()> {
    let input = input.unwrap_or(config.default_input);
    let use_case = CheckPulseUseCase::new(InMemoryVitalsRepository::new());

    match use_case.run(input, &CancellationToken::new()).await {
        Ok(PulseOutcome::Success) => {
            println!("Pulse checked!");
            Ok(())
        }
        Ok(outcome) => {
            let message = outcome.error_message().unwrap_or_default().to_string();
            error!(error_message = %message, "Pulse check failed");
            Err(anyhow::anyhow!("pulse check failed: {}", message))
        }
        Err(fault) => {
            error!(error = %fault, "There was an unrecoverable error while pulse checking");
            Err(fault.into())
        }
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PULSE CHECK - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Default Input: {}", config.default_input);
    println!("  Log Level: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
