use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::signal;

use fsearch::cli::commands::{
    handle_delete, handle_info, handle_search, handle_status, handle_upload,
};
use fsearch::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tokio::select! {
        result = run_command(cli) => {
            result?;
        }
        _ = shutdown_signal() => {
            eprintln!("\nInterrupted.");
        }
    }

    Ok(())
}

async fn run_command(cli: Cli) -> Result<()> {
    let format = cli.format.unwrap_or_default();
    let verbose = cli.verbose;
    let token = cli.token;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Upload(args) => handle_upload(args, token, format, verbose).await,
        Commands::Delete(args) => handle_delete(args, token, format, verbose).await,
        Commands::Search(args) => handle_search(args, token, format, verbose).await,
        Commands::Status(args) => handle_status(args, token, format, verbose).await,
        Commands::Info => handle_info(token, format, verbose).await,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
