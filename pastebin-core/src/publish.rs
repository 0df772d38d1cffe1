//! Build → submit → check, for one file.
//!
//! [`publish`] takes already-loaded inputs so that it can be driven by the CLI
//! or by tests with a mocked [`Submitter`]. Fail-fast: the first error is
//! returned and nothing is printed here.

use tracing::{error, info};

use crate::config::Credentials;
use crate::contract::Submitter;
use crate::error::PasteError;
use crate::file::FileMetadata;
use crate::paste::{build, check_response, PasteOptions};

/// Publishes one paste and returns its URL.
pub async fn publish<S>(
    submitter: &S,
    endpoint: &str,
    meta: &FileMetadata,
    creds: &Credentials,
    opts: &PasteOptions,
) -> Result<String, PasteError>
where
    S: Submitter + ?Sized,
{
    let request = build(meta, creds, opts);
    info!(endpoint = %endpoint, name = %request.name, "Submitting paste");

    let body = submitter.submit(&request, endpoint).await.map_err(|e| {
        error!(error = %e, endpoint = %endpoint, "Paste submission failed");
        PasteError::from(e)
    })?;

    match check_response(&body) {
        Ok(url) => {
            info!(url = %url, "Paste created");
            Ok(url)
        }
        Err(e) => {
            error!(error = %e, "Paste API rejected the request");
            Err(e)
        }
    }
}
