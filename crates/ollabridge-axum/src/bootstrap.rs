//! Axum server bootstrap - the composition root.
//!
//! This is the only place where the concrete Ollama client is constructed
//! and wired into the handlers.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ollabridge_core::{BridgeService, OllamaPort};
use ollabridge_runtime::{
    AddressError, OllamaClientConfig, OllamaHttpClient, ReadinessPolicy, resolve_base_url,
    wait_for_backend_ready,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::create_router;

/// Server configuration, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "ollabridge", version, about = "HTTP bridge in front of an Ollama runtime")]
pub struct ServerConfig {
    /// Ollama address; a bare `host[:port]` is treated as http on port 11434.
    #[arg(long, env = "OLLAMA_BASE_URL")]
    pub ollama_base_url: Option<String>,

    /// Interface to listen on.
    #[arg(long, env = "OLLABRIDGE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "OLLABRIDGE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Readiness probes before giving up at startup.
    #[arg(long, env = "OLLABRIDGE_READY_ATTEMPTS", default_value_t = 30)]
    pub ready_attempts: u32,

    /// Seconds between readiness probes.
    #[arg(long, env = "OLLABRIDGE_READY_INTERVAL_SECS", default_value_t = 2)]
    pub ready_interval_secs: u64,

    /// Upper bound for a single Ollama request, in seconds.
    #[arg(long, env = "OLLABRIDGE_REQUEST_TIMEOUT_SECS", default_value_t = 300)]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: None,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            ready_attempts: 30,
            ready_interval_secs: 2,
            request_timeout_secs: 300,
        }
    }
}

impl ServerConfig {
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn readiness_policy(&self) -> ReadinessPolicy {
        ReadinessPolicy {
            max_attempts: self.ready_attempts,
            interval: Duration::from_secs(self.ready_interval_secs),
            ..ReadinessPolicy::default()
        }
    }

    /// Resolve the Ollama address into a client configuration.
    pub fn client_config(&self) -> Result<OllamaClientConfig, AddressError> {
        if self.ollama_base_url.is_none() {
            warn!("OLLAMA_BASE_URL is not set, falling back to the Ollama default address");
        }
        let base_url = resolve_base_url(self.ollama_base_url.as_deref())?;

        Ok(OllamaClientConfig::new()
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(self.request_timeout_secs)))
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Backend handle, also used for the startup readiness gate.
    pub ollama: Arc<dyn OllamaPort>,
    pub bridge: BridgeService,
}

impl AxumContext {
    pub fn new(ollama: Arc<dyn OllamaPort>) -> Self {
        let bridge = BridgeService::new(Arc::clone(&ollama));
        Self { ollama, bridge }
    }
}

/// Build the context with the real Ollama client.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let client_config = config
        .client_config()
        .context("Invalid Ollama address")?;

    info!(base_url = %client_config.base_url(), "Using Ollama backend");

    let client =
        OllamaHttpClient::new(&client_config).context("Failed to build Ollama HTTP client")?;

    Ok(AxumContext::new(Arc::new(client)))
}

/// Wait for Ollama, then serve until interrupted.
///
/// Fails without binding the listener when the readiness gate gives up.
pub async fn run(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    if !wait_for_backend_ready(ctx.ollama.as_ref(), &config.readiness_policy()).await {
        anyhow::bail!("Could not connect to Ollama. Exiting.");
    }

    start_server(ctx, config.bind_addr()).await
}

/// Start the web server on the given address.
pub async fn start_server(ctx: AxumContext, addr: SocketAddr) -> Result<()> {
    let app = create_router(ctx);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("ollabridge listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("ollabridge stopped");
    Ok(())
}

/// Resolve on Ctrl+C, or on SIGTERM where available (`docker stop`).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
