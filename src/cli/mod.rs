pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "storeboard")]
#[command(about = "Storeboard CLI - access policy tooling for the dashboard API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Evaluate the route guard for a path and session")]
    Check {
        #[arg(help = "Request path to evaluate, e.g. /products")]
        path: String,

        #[arg(long, help = "Role cookie value to assume (admin or store_manager)")]
        role: Option<String>,
    },

    #[command(about = "Access policy inspection")]
    Policy {
        #[command(subcommand)]
        cmd: commands::policy::PolicyCommands,
    },

    #[command(about = "Remote server management")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Check { path, role } => commands::check::handle(path, role, output_format).await,
        Commands::Policy { cmd } => commands::policy::handle(cmd, output_format).await,
        Commands::Server { cmd } => commands::server::handle(cmd, output_format).await,
    }
}
