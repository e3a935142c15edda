//! Startup readiness gate.
//!
//! Polls Ollama's list-models probe at a fixed interval until it answers or
//! the attempt budget runs out. There is no backoff and no jitter: with the
//! default policy a refused backend is given up on after 30 probes, roughly 58
//! seconds. Each probe is bounded by `probe_timeout`, so a backend that
//! accepts connections but never answers still gives up in bounded time.

use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

use ollabridge_core::OllamaPort;

/// Attempt budget for [`wait_for_backend_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    /// Probes to try before giving up.
    pub max_attempts: u32,
    /// Pause between a failed probe and the next one.
    pub interval: Duration,
    /// Upper bound for a single probe; an unanswered probe counts as failed.
    pub probe_timeout: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
            probe_timeout: Duration::from_secs(5),
        }
    }
}

/// Block until Ollama answers the probe.
///
/// Returns `true` as soon as a probe succeeds and `false` once
/// `max_attempts` probes have failed. No sleep follows the final failure.
pub async fn wait_for_backend_ready(ollama: &dyn OllamaPort, policy: &ReadinessPolicy) -> bool {
    info!("Waiting for Ollama service to be ready...");

    let max_attempts = policy.max_attempts;
    let mut attempt = 0;

    while attempt < max_attempts {
        let probe = match timeout(policy.probe_timeout, ollama.list_models()).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(_) => Err(format!("no answer within {:?}", policy.probe_timeout)),
        };

        match probe {
            Ok(_) => {
                info!(attempts = attempt + 1, "Ollama service is ready");
                return true;
            }
            Err(e) => {
                attempt += 1;
                warn!("Retry {attempt}/{max_attempts}: Ollama not ready yet ({e})");
                if attempt < max_attempts {
                    sleep(policy.interval).await;
                }
            }
        }
    }

    error!("Failed to connect to Ollama service after {max_attempts} attempts");
    false
}
