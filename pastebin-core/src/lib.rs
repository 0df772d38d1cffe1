#![doc = "pastebin-core: types and request building for the pastebin CLI."]

//! All domain logic lives here: the input file loader, credentials, paste
//! options, the request builder, response checking, and the [`contract::Submitter`]
//! seam that the CLI crate implements over HTTP.

pub mod config;
pub mod contract;
pub mod error;
pub mod file;
pub mod paste;
pub mod publish;

pub use config::{Credentials, WireFormat, DEFAULT_ENDPOINT};
pub use error::{PasteError, SubmitError};
pub use file::{load_file, FileMetadata};
pub use paste::{build, check_response, PasteOptions, PasteRequest, Privacy};
pub use publish::publish;
