use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use resumate_config::Config;
use tokio::signal;

pub mod analyze;
pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Commands};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    logging::init_tracing(&config.log_filter);
    tracing::debug!("Starting resumate v{}", env!("CARGO_PKG_VERSION"));

    let code = match run(cli.command.unwrap_or(Commands::Form), config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    };

    let _ = std::io::stdout().flush();
    code
}

async fn run(command: Commands, config: Config) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Analyze(args) => {
            let state = AppState::new(config)?;
            analyze::run(&state, &args).await
        }
        Commands::Form => {
            let state = Arc::new(AppState::new(config)?);
            run_form(state).await
        }
    }
}

async fn run_form(state: Arc<AppState>) -> anyhow::Result<ExitCode> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let result = tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        Some(joined) = tasks.join_next() => {
            match joined {
                Ok(result) => result,
                Err(e) => Err(e.into()),
            }
        }
    };

    controller.shutdown();

    // The prompt thread may still be blocked on stdin, don't wait for it
    let code = match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("Task failed: {e:#}");
            eprintln!("error: {e:#}");
            1
        }
    };
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}
