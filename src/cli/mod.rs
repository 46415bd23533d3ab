//! CLI module for the face search CLI.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::models::{OutputFormat, TOKEN_ENV_VAR};

/// Reverse face search CLI for the FaceCheck web API.
#[derive(Debug, Parser)]
#[command(name = "fsearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(
        long,
        short = 't',
        global = true,
        env = TOKEN_ENV_VAR,
        hide_env_values = true,
        help = "API token (falls back to the environment, then the config file)"
    )]
    pub token: Option<String>,

    #[arg(long, short = 'f', global = true, help = "Output format: text or json")]
    pub format: Option<OutputFormat>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    // Absent means "print help"; running with no verb is not an error.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload a face image, creating or extending a search
    Upload(commands::UploadArgs),

    /// Remove an uploaded image from a search
    Delete(commands::DeleteArgs),

    /// Run a search and wait for results
    Search(commands::SearchArgs),

    /// Check the progress of a search without advancing it
    Status(commands::StatusArgs),

    /// Show account and service status
    Info,
}
