//! Endpoint reachability probe; gates sends while offline.
//!
//! A browser gets online/offline events from the platform; a terminal does
//! not, so the TUI probes the endpoint on an interval instead.

use std::time::Duration;

/// Reachability of the agent endpoint. Starts Online until the first probe
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Online,
    Offline,
}

impl Connectivity {
    pub fn is_online(self) -> bool {
        matches!(self, Connectivity::Online)
    }
}

/// How often the TUI re-probes the endpoint.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(30);

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HEAD the endpoint. Any HTTP response proves reachability; only transport
/// failures (connect, DNS, timeout) count as offline.
pub async fn probe(http: &reqwest::Client, endpoint: &reqwest::Url) -> Connectivity {
    match http
        .head(endpoint.clone())
        .timeout(PROBE_TIMEOUT)
        .send()
        .await
    {
        Ok(_) => Connectivity::Online,
        Err(e) => {
            log::debug!("connectivity probe failed: {}", e);
            Connectivity::Offline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_online() {
        assert!(Connectivity::default().is_online());
        assert!(!Connectivity::Offline.is_online());
    }
}
