//! # contract: the submission seam
//!
//! A single trait, [`Submitter`], stands between the pure request building in
//! this crate and the network. The CLI crate provides the reqwest-backed
//! implementation; tests use the generated `MockSubmitter`.
//!
//! ## Contract
//! - One call is one HTTP exchange. No retries.
//! - Any HTTP status that comes back with a readable body is `Ok(body)`,
//!   returned verbatim. Interpreting the body is the caller's job
//!   (see [`crate::paste::check_response`]).
//! - DNS, connect and timeout failures are [`SubmitError::Transport`].

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::paste::PasteRequest;

#[cfg_attr(any(test, feature = "test-export-mocks"), mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Sends `request` to `endpoint` and returns the raw response body.
    async fn submit(&self, request: &PasteRequest, endpoint: &str) -> Result<String, SubmitError>;
}
