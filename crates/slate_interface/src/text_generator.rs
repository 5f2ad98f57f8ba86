//! The upstream text generation capability.

use async_trait::async_trait;
use slate_error::SlateResult;

/// Opaque text-in/text-out capability backed by a generative model.
///
/// The analysis pipeline treats the upstream service as a black box: one
/// instruction string in, one text blob out. The credential needed to call
/// the real service is owned by the implementation and injected at
/// construction, never read from process-wide state.
///
/// A single call either completes or fails; there is no streaming, no
/// partial result, and no automatic retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a response for the given instruction string.
    ///
    /// # Errors
    ///
    /// Returns an error when the upstream call itself fails (network, quota,
    /// model error). A response that is merely malformed is *not* an error
    /// at this layer; normalization happens downstream.
    async fn generate(&self, prompt: &str) -> SlateResult<String>;
}
