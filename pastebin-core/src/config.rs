use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default endpoint for paste creation on pastebin.com.
pub const DEFAULT_ENDPOINT: &str = "https://pastebin.com/api/api_post.php";

/// API credentials: the application's dev key and the submitting user's key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub dev_key: String,
    pub user_key: String,
}

impl Credentials {
    pub fn new(dev_key: impl Into<String>, user_key: impl Into<String>) -> Self {
        Credentials {
            dev_key: dev_key.into(),
            user_key: user_key.into(),
        }
    }

    pub fn trace_loaded(&self) {
        info!(
            dev_key = %mask_key(&self.dev_key),
            user_key = %mask_key(&self.user_key),
            "Loaded credentials"
        );
    }
}

// Keys must never reach the logs in clear.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("dev_key", &mask_key(&self.dev_key))
            .field("user_key", &mask_key(&self.user_key))
            .finish()
    }
}

/// Body encoding expected by the paste endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// `application/x-www-form-urlencoded`, the documented pastebin.com contract.
    #[default]
    Form,
    /// `application/json`.
    Json,
}

impl WireFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            WireFormat::Form => "application/x-www-form-urlencoded",
            WireFormat::Json => "application/json",
        }
    }

    pub fn trace_selected(self) {
        debug!(wire_format = ?self, content_type = self.content_type(), "Selected wire format");
    }
}

/// Shows at most the first four characters of a key.
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "<empty>".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    if prefix.len() == key.len() {
        "****".to_string()
    } else {
        format!("{prefix}****")
    }
}
