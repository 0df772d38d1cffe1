//! # Submitter over HTTP
//!
//! [`PasteClient`] implements [`pastebin_core::contract::Submitter`] with
//! reqwest. It owns the wire encoding: the request is sent either
//! form-encoded (the pastebin.com contract) or as JSON, depending on the
//! configured [`WireFormat`].
//!
//! One call is one POST. Whatever status comes back, the body is returned
//! verbatim; only transport failures are errors.

use async_trait::async_trait;
use pastebin_core::config::WireFormat;
use pastebin_core::contract::Submitter;
use pastebin_core::error::SubmitError;
use pastebin_core::paste::PasteRequest;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PasteClient {
    client: reqwest::Client,
    wire_format: WireFormat,
}

impl PasteClient {
    /// Client with the default 30 second timeout.
    pub fn new(wire_format: WireFormat) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to build HTTP client");
                SubmitError::Transport(Box::new(e))
            })?;
        tracing::info!(wire_format = ?wire_format, timeout_secs = DEFAULT_TIMEOUT.as_secs(), "Initialized PasteClient");
        Ok(Self::with_client(client, wire_format))
    }

    /// Wraps an already configured reqwest client.
    pub fn with_client(client: reqwest::Client, wire_format: WireFormat) -> Self {
        wire_format.trace_selected();
        PasteClient {
            client,
            wire_format,
        }
    }

    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }
}

#[async_trait]
impl Submitter for PasteClient {
    async fn submit(&self, request: &PasteRequest, endpoint: &str) -> Result<String, SubmitError> {
        tracing::info!(
            endpoint = %endpoint,
            wire_format = ?self.wire_format,
            bytes = request.code.len(),
            "Posting paste"
        );

        let builder = self.client.post(endpoint);
        let builder = match self.wire_format {
            WireFormat::Form => builder.form(request),
            WireFormat::Json => {
                let body = serde_json::to_vec(request).map_err(|e| {
                    tracing::error!(error = ?e, "Failed to encode paste request as JSON");
                    SubmitError::Serialization(e.to_string())
                })?;
                builder
                    .header(CONTENT_TYPE, WireFormat::Json.content_type())
                    .body(body)
            }
        };

        let response = builder.send().await.map_err(|e| {
            // Form encoding errors only show up when the request is built.
            if e.is_builder() {
                tracing::error!(error = ?e, "Failed to encode paste request");
                SubmitError::Serialization(e.to_string())
            } else {
                tracing::error!(error = ?e, endpoint = %endpoint, "HTTP request failed");
                SubmitError::Transport(Box::new(e))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = ?e, %status, "Failed to read response body");
            SubmitError::Transport(Box::new(e))
        })?;

        tracing::info!(%status, body_len = body.len(), "Paste endpoint responded");
        Ok(body)
    }
}
