///
/// This module implements the CLI interface for pastebin: flag parsing,
/// argument validation, and the [`run`] entrypoint used by `main` and by the
/// integration tests.
///
/// Domain logic (file loading, request building, response checking) lives in
/// the [`pastebin-core`] crate. This module only wires the pieces together:
///
/// 1. validate arguments (exactly one file, privacy in {-1, 0, 1, 2})
/// 2. resolve and load the config file
/// 3. load the input file
/// 4. publish through a [`PasteClient`]
///
/// [`run`] never prints and never exits; `main` owns stdout and the exit code.
///
/// [`pastebin-core`]: ../../pastebin-core/
use crate::load_config::{load_config, resolve_config_path};
use crate::submit::PasteClient;
use clap::Parser;
use pastebin_core::error::PasteError;
use pastebin_core::file::load_file;
use pastebin_core::paste::{PasteOptions, Privacy};
use pastebin_core::publish::publish;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// CLI for pastebin: submit one file as a new paste and print its URL.
#[derive(Parser, Debug)]
#[clap(
    name = "pastebin",
    version,
    about = "Submit a local file as a new paste and print the resulting URL"
)]
pub struct Cli {
    /// Path to the YAML config file [default: $HOME/.pastebin.yaml]
    #[clap(long = "conf", value_name = "PATH")]
    pub conf: Option<PathBuf>,

    /// Expiration code (N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y) [default: N]
    #[clap(long = "exp", value_name = "CODE")]
    pub exp: Option<String>,

    /// Privacy: 0 public, 1 unlisted, 2 private; -1 leaves it unset (public)
    #[clap(
        long = "priv",
        value_name = "LEVEL",
        default_value_t = Privacy::UNSET,
        allow_negative_numbers = true
    )]
    pub privacy: i64,

    /// The file to paste
    #[clap(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Long flags that may also be spelled with a single dash (`-conf`).
const SINGLE_DASH_FLAGS: &[&str] = &["conf", "exp", "priv"];

/// Rewrites `-conf`, `-exp` and `-priv` (and their `-flag=value` forms) to
/// the double-dash spelling clap expects. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                past_separator = true;
                return arg;
            }
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parses process-style arguments, accepting single-dash long flags.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(normalize_args(args))
    }

    /// Like [`Cli::parse_args`] but returns clap's error instead of exiting.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }

    /// The single input path, or [`PasteError::InvalidArgumentCount`].
    pub fn input_path(&self) -> Result<&Path, PasteError> {
        match self.files.as_slice() {
            [path] => Ok(path.as_path()),
            other => Err(PasteError::InvalidArgumentCount(other.len())),
        }
    }

    /// Validated paste options. Unset values stay unset for the builder.
    pub fn paste_options(&self) -> Result<PasteOptions, PasteError> {
        Ok(PasteOptions {
            expiration_code: self.exp.clone().unwrap_or_default(),
            privacy: Privacy::from_flag(self.privacy)?,
        })
    }
}

/// Runs one invocation and returns the paste URL.
pub async fn run(cli: Cli) -> Result<String, PasteError> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    let input = cli.input_path()?;
    let opts = cli.paste_options()?;

    let config_path = resolve_config_path(cli.conf.clone())?;
    let config = load_config(&config_path)?;
    let meta = load_file(input)?;

    let client = PasteClient::new(config.wire_format)?;
    let result = publish(
        &client,
        &config.endpoint,
        &meta,
        &config.credentials,
        &opts,
    )
    .await;

    if let Ok(url) = &result {
        tracing::info!(command = "paste", url = %url, "Paste published");
    }
    result
}
