use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/storeboard-api");
        cmd.env("STOREBOARD_PORT", port.to_string())
            // Point the backend at a port nothing listens on. Guard behavior
            // never needs the backend; the login and health tests assert the
            // degraded paths this produces.
            .env("STOREBOARD_BACKEND_URL", "http://127.0.0.1:9/")
            .env("STOREBOARD_BACKEND_KEY", "test-key")
            .env("BACKEND_REQUEST_TIMEOUT_SECS", "2")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline { break; }
            let url = format!("{}/health", self.base_url);
            match client.get(&url).send().await {
                Ok(resp) => {
                    // Ready once /health answers; degraded still means routable
                    if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                        return Ok(());
                    }
                }
                Err(_) => {}
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    // Use stable get_or_init and convert init errors into a panic with context.
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Client that reports redirects instead of following them
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build client")
}

/// GET a path, optionally presenting a role cookie
pub async fn get_page(
    server: &TestServer,
    path: &str,
    role: Option<&str>,
) -> Result<reqwest::Response> {
    let client = no_redirect_client();
    let mut request = client.get(format!("{}{}", server.base_url, path));
    if let Some(role) = role {
        request = request.header(reqwest::header::COOKIE, format!("userRole={}", role));
    }
    request.send().await.context("request failed")
}

/// Location header as a string, if present
pub fn location_of(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
