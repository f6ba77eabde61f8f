//! HTTP client for the weather agent endpoint.
//!
//! One POST per user message, no client-side retry: the `maxRetries` field in
//! the body only governs server-side behavior.

use reqwest::header::ACCEPT;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;

/// Run identifier sent with every request.
const RUN_ID: &str = "weatherAgent";
/// Resource identifier; scopes the (empty) runtime context server-side.
const RESOURCE_ID: &str = "weatherAgent";
const MAX_RETRIES: u32 = 2;
const MAX_STEPS: u32 = 5;
const TEMPERATURE: f64 = 0.5;
const TOP_P: f64 = 1.0;
/// Debug flag the Mastra dev playground endpoint expects.
const DEV_PLAYGROUND_HEADER: &str = "x-mastra-dev-playground";

/// Called once a success status arrives, before the body is read. Drives the
/// optimistic Sent status on the user message.
pub type OnAccepted = Box<dyn Fn() + Send>;

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Non-2xx response from the endpoint.
    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request was cancelled by the user.
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AgentRequest<'a> {
    messages: Vec<OutgoingMessage<'a>>,
    run_id: &'a str,
    max_retries: u32,
    max_steps: u32,
    temperature: f64,
    top_p: f64,
    runtime_context: serde_json::Map<String, serde_json::Value>,
    resource_id: &'a str,
}

#[derive(Serialize)]
struct OutgoingMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> AgentRequest<'a> {
    fn for_prompt(text: &'a str) -> Self {
        Self {
            messages: vec![OutgoingMessage {
                role: "user",
                content: text,
            }],
            run_id: RUN_ID,
            max_retries: MAX_RETRIES,
            max_steps: MAX_STEPS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            runtime_context: serde_json::Map::new(),
            resource_id: RESOURCE_ID,
        }
    }
}

/// Owned handle to the remote agent: one connection pool plus the endpoint.
/// Constructed once at startup and shared.
pub struct AgentClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl AgentClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// POST one user message; returns the raw response body on success.
    /// The body is handed whole to the normalizer by the caller, whatever its
    /// shape. Cancellation wins any race with the network.
    pub async fn send_message(
        &self,
        text: &str,
        on_accepted: Option<OnAccepted>,
        cancel: Option<CancellationToken>,
    ) -> Result<String, AgentError> {
        let cancel = cancel.unwrap_or_default();
        let request = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "*/*")
            .header(DEV_PLAYGROUND_HEADER, "true")
            .json(&AgentRequest::for_prompt(text))
            .send();

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(AgentError::Cancelled),
            response = request => response?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        if let Some(notify) = on_accepted {
            notify();
        }

        let body = tokio::select! {
            _ = cancel.cancelled() => return Err(AgentError::Cancelled),
            body = response.text() => body?,
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_endpoint_contract() {
        let body = serde_json::to_value(AgentRequest::for_prompt("weather in Oslo"))
            .expect("serializes");
        assert_eq!(body["runId"], "weatherAgent");
        assert_eq!(body["resourceId"], "weatherAgent");
        assert_eq!(body["maxRetries"], 2);
        assert_eq!(body["maxSteps"], 5);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["topP"], 1.0);
        assert_eq!(body["runtimeContext"], serde_json::json!({}));
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "weather in Oslo");
    }

    #[test]
    fn status_error_reads_like_the_banner() {
        let err = AgentError::Status {
            status: 502,
            reason: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 502 Bad Gateway");
    }
}
