//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "nwatch")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "NeoWatch client: sign up for asteroid alerts")]
pub struct Cli {
    /// Config file (format picked from the extension). Defaults to an optional `client.*`.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides `api.base_url` from the config
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Register a new user with the notification service
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// At least two characters
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// At least two characters
    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Register with alert emails switched off
    #[arg(long)]
    pub no_notifications: bool,
}
