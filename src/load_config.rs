/// `load_config` module: finds and parses the YAML credential file into an [`AppConfig`].
///
/// This is the only place where the user's config file is read. Resolution of
/// the default path (`$HOME/.pastebin.yaml`) happens once, in
/// [`resolve_config_path`], and the resulting [`AppConfig`] is passed by
/// reference to the rest of the pipeline.
///
/// # Accepted keys
/// - `devkey` (required): application key
/// - `userkey` (required): user session key
/// - `endpoint` (optional): paste creation URL, defaults to pastebin.com
/// - `wire_format` (optional): `form` or `json`, defaults to `form`
///
/// Unknown keys are ignored.
use pastebin_core::config::{Credentials, WireFormat, DEFAULT_ENDPOINT};
use pastebin_core::error::PasteError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Config file name looked up in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".pastebin.yaml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub endpoint: String,
    pub wire_format: WireFormat,
}

impl AppConfig {
    pub fn trace_loaded(&self) {
        self.credentials.trace_loaded();
        info!(endpoint = %self.endpoint, wire_format = ?self.wire_format, "Loaded AppConfig");
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    devkey: Option<String>,
    userkey: Option<String>,
    endpoint: Option<String>,
    wire_format: Option<WireFormat>,
}

/// The default config path under `home`.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_CONFIG_FILE)
}

/// Picks the explicit path if given, otherwise `$HOME/.pastebin.yaml`.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, PasteError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match dirs::home_dir() {
        Some(home) => {
            let path = default_config_path(&home);
            info!(config_path = ?path, "Using default config path");
            Ok(path)
        }
        None => {
            error!("Could not determine home directory for default config path");
            Err(PasteError::ConfigNotFound {
                path: PathBuf::from("~").join(DEFAULT_CONFIG_FILE),
            })
        }
    }
}

fn required(path: &Path, key: &str, value: Option<String>) -> Result<String, PasteError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(PasteError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: format!("`{key}` must not be empty"),
        }),
        None => Err(PasteError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: format!("missing required key `{key}`"),
        }),
    }
}

/// Loads and validates the YAML config file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, PasteError> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!(config_path = ?path_ref, "Config file does not exist");
            return Err(PasteError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(PasteError::ConfigUnreadable {
                path: path_ref.to_path_buf(),
                source: e,
            });
        }
    };

    let raw: RawConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(PasteError::ConfigMalformed {
                path: path_ref.to_path_buf(),
                reason: format!("invalid YAML: {e}"),
            });
        }
    };

    let dev_key = required(path_ref, "devkey", raw.devkey)?;
    let user_key = required(path_ref, "userkey", raw.userkey)?;

    let endpoint = raw
        .endpoint
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    if let Err(e) = reqwest::Url::parse(&endpoint) {
        error!(error = ?e, endpoint = %endpoint, "Configured endpoint is not a valid URL");
        return Err(PasteError::ConfigMalformed {
            path: path_ref.to_path_buf(),
            reason: format!("`endpoint` is not a valid URL: {e}"),
        });
    }

    let config = AppConfig {
        credentials: Credentials::new(dev_key, user_key),
        endpoint,
        wire_format: raw.wire_format.unwrap_or_default(),
    };
    config.trace_loaded();
    Ok(config)
}
