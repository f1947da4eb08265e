//! Encoding backend trait and shared error type.
//!
//! The [`ImageBackend`] trait defines the single operation the pipeline
//! needs: encode one source image as lossy WebP. The production
//! implementation is [`RustBackend`](super::rust_backend::RustBackend);
//! tests substitute the [`tests::MockBackend`].

use super::params::EncodeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for WebP encoding backends.
///
/// `Sync` so one backend instance can be shared across rayon workers.
pub trait ImageBackend: Sync {
    /// Encode the source image as lossy WebP at `params.quality` and
    /// write the artifact to `params.output`, overwriting any existing
    /// file at that path. The artifact is either fully written or an
    /// error is returned; callers never observe a partial result as
    /// success.
    fn encode(&self, params: &EncodeParams) -> Result<(), BackendError>;
}
