use anyhow::Context;
use clap::Parser;
use repwatch_api::AppState;
use repwatch_domain::{CliOverrides, Config};
use repwatch_jobs::{JobRunner, SecurityCheckJob};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "repwatch")]
#[command(version)]
#[command(about = "repwatch - periodic domain reputation checker")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Domain list file
    #[arg(long, value_name = "FILE")]
    domains: Option<String>,

    /// Results file
    #[arg(long, value_name = "FILE")]
    results: Option<String>,

    /// Seconds between check cycles
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Serve the JSON API alongside the checker
    #[arg(long)]
    serve: bool,

    /// Run a single check cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        domains_file: cli.domains.clone(),
        results_file: cli.results.clone(),
        interval_secs: cli.interval,
        log_level: cli.log_level.clone(),
        web_port: cli.web_port,
        serve: cli.serve,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    let logging = bootstrap::init_logging(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config.clone().or_else(Config::get_config_path),
        domains_file = %config.checker.domains_file,
        results_file = %config.checker.results_file,
        "Starting repwatch"
    );

    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos, &config)?;

    if cli.once {
        use_cases
            .run_check_cycle
            .execute()
            .await
            .context("Check cycle failed")?;
        drop(logging);
        return Ok(());
    }

    let shutdown = CancellationToken::new();

    let security_check = SecurityCheckJob::new(use_cases.run_check_cycle.clone())
        .with_interval(config.checker.interval())
        .with_run_on_startup(config.checker.run_on_startup)
        .with_error_cooldown(config.checker.error_cooldown());

    let job_handles = JobRunner::new()
        .with_security_check(security_check)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let web_handle = if config.server.enabled {
        let web_addr: SocketAddr =
            format!("{}:{}", config.server.bind_address, config.server.web_port)
                .parse()
                .context("Invalid web server address")?;

        let app_state = AppState {
            get_domains: use_cases.get_domains.clone(),
            add_domain: use_cases.add_domain.clone(),
            get_results: use_cases.get_results.clone(),
            check_connectivity: use_cases.check_connectivity.clone(),
        };

        let token = shutdown.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, app_state, token).await {
                error!(error = %e, "Web server error");
            }
        }))
    } else {
        None
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
    shutdown.cancel();

    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }
    if let Some(handle) = web_handle {
        let _ = handle.await;
    }

    info!("Shutdown complete");
    drop(logging);
    Ok(())
}
