//! Paste options, the wire-shaped request, and the builder that joins them.
//!
//! [`build`] is the only place where internal names meet the remote API's
//! field names; everything downstream serializes [`PasteRequest`] as-is.

use crate::config::Credentials;
use crate::error::PasteError;
use crate::file::FileMetadata;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Expiration code meaning "never expire".
pub const DEFAULT_EXPIRATION: &str = "N";

/// Value of `api_option` for paste creation.
pub const API_OPTION_PASTE: &str = "paste";

/// Error prefix the pastebin API uses in place of HTTP error statuses.
pub const API_ERROR_PREFIX: &str = "Bad API request";

/// Paste visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Privacy {
    /// Listed publicly.
    #[default]
    Public = 0,
    /// Reachable by link only.
    Unlisted = 1,
    /// Visible to the owner only.
    Private = 2,
}

impl Privacy {
    /// Flag value meaning "not set".
    pub const UNSET: i64 = -1;

    /// Validates a command-line privacy value. `-1` means unset.
    pub fn from_flag(value: i64) -> Result<Option<Privacy>, PasteError> {
        match value {
            Self::UNSET => Ok(None),
            0 => Ok(Some(Privacy::Public)),
            1 => Ok(Some(Privacy::Unlisted)),
            2 => Ok(Some(Privacy::Private)),
            other => Err(PasteError::InvalidPrivacyValue(other)),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// User-supplied options. Unset values are resolved by [`build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteOptions {
    pub expiration_code: String,
    pub privacy: Option<Privacy>,
}

/// The paste-creation payload, named as the remote API names its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteRequest {
    #[serde(rename = "api_dev_key")]
    pub dev_key: String,
    #[serde(rename = "api_user_key")]
    pub user_key: String,
    #[serde(rename = "api_option")]
    pub option: String,
    #[serde(rename = "api_paste_code")]
    pub code: String,
    #[serde(rename = "api_paste_name")]
    pub name: String,
    #[serde(rename = "api_paste_format")]
    pub format: String,
    #[serde(rename = "api_paste_private")]
    pub privacy: u8,
    #[serde(rename = "api_paste_expire_date")]
    pub expiration: String,
}

/// Assembles the request. Pure: no I/O and no failure paths.
pub fn build(meta: &FileMetadata, creds: &Credentials, opts: &PasteOptions) -> PasteRequest {
    let privacy = opts.privacy.unwrap_or_default();
    let expiration = if opts.expiration_code.is_empty() {
        DEFAULT_EXPIRATION.to_string()
    } else {
        opts.expiration_code.clone()
    };

    debug!(
        name = %meta.filename,
        format = %meta.filetype,
        privacy = privacy.code(),
        expiration = %expiration,
        "Built paste request"
    );

    PasteRequest {
        dev_key: creds.dev_key.clone(),
        user_key: creds.user_key.clone(),
        option: API_OPTION_PASTE.to_string(),
        code: String::from_utf8_lossy(&meta.contents).into_owned(),
        name: meta.filename.clone(),
        format: meta.filetype.clone(),
        privacy: privacy.code(),
        expiration,
    }
}

/// Interprets a raw response body. The API answers 200 for errors too, so
/// only the text tells success from failure.
pub fn check_response(body: &str) -> Result<String, PasteError> {
    let trimmed = body.trim();
    if trimmed.starts_with(API_ERROR_PREFIX)
        || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        return Err(PasteError::RemoteApi(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
