use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::{utils, OutputFormat};
use crate::session::ROLE_COOKIE;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Ping a running server's health endpoint")]
    Ping {
        #[arg(help = "Server base URL, e.g. http://localhost:3000")]
        url: String,
    },

    #[command(about = "Ask a running server how it reads a session")]
    Session {
        #[arg(help = "Server base URL, e.g. http://localhost:3000")]
        url: String,

        #[arg(long, help = "Role cookie value to present (admin or store_manager)")]
        role: Option<String>,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Ping { url } => ping(&url, &output_format).await,
        ServerCommands::Session { url, role } => session(&url, role, &output_format).await,
    }
}

async fn ping(url: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let endpoint = format!("{}/health", url.trim_end_matches('/'));
    let response = reqwest::get(&endpoint).await?;
    let status = response.status();
    let body: Value = response.json().await.unwrap_or_else(|_| json!({}));

    if status.is_success() {
        utils::output_success(
            output_format,
            &format!("Server at {} is healthy", url),
            Some(json!({ "health": body })),
        )
    } else {
        utils::output_error(
            output_format,
            &format!("Server at {} reported status {}", url, status.as_u16()),
            Some("UNHEALTHY"),
        )
    }
}

async fn session(url: &str, role: Option<String>, output_format: &OutputFormat) -> anyhow::Result<()> {
    let endpoint = format!("{}/api/auth/session", url.trim_end_matches('/'));
    let client = reqwest::Client::new();

    let mut request = client.get(&endpoint);
    if let Some(value) = &role {
        request = request.header(reqwest::header::COOKIE, format!("{}={}", ROLE_COOKIE, value));
    }

    let body: Value = request.send().await?.json().await?;

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            let authenticated = body["data"]["authenticated"].as_bool().unwrap_or(false);
            let role = body["data"]["role"].as_str().unwrap_or("none");
            println!("Authenticated: {}", authenticated);
            println!("Role:          {}", role);
        }
    }

    Ok(())
}
