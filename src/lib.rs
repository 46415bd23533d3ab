pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Cli, Commands};
pub use client::ApiClient;
pub use error::{ClientError, ConfigError};
pub use models::{Config, OutputFormat};
