//! WebP encoding backend built on `image` + libwebp.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image` crate (pure Rust decoders) |
//! | Encode → WebP | `webp::Encoder::encode_advanced` (libwebp) |
//!
//! libwebp is compiled in through `libwebp-sys`, so the binary carries
//! its own codec: no system sharp, ImageMagick, or cwebp install is
//! consulted at runtime.

use super::backend::{BackendError, ImageBackend};
use super::params::EncodeParams;
use image::{DynamicImage, ImageReader};
use std::path::Path;
use webp::WebPConfig;

/// libwebp compression method, 0 (fast) to 6 (slowest, smallest).
///
/// Fixed at maximum: conversion runs offline, so encode time is traded
/// for output size across the board.
const ENCODE_EFFORT: i32 = 6;

/// Backend using the `image` crate for decoding and libwebp for
/// encoding. See the [module docs](self) for the crate mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Convert a decoded image to a buffer libwebp accepts.
///
/// libwebp takes RGB8 or RGBA8 input; grayscale and 16-bit decodes are
/// converted first, keeping the alpha channel when the source has one.
fn to_encodable(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Encode `img` as lossy WebP and write it to `output`.
///
/// Sharp-YUV chroma subsampling is always on; like the effort setting,
/// it is not tunable per call.
fn save_webp(img: &DynamicImage, output: &Path, quality: u32) -> Result<(), BackendError> {
    let mut config = WebPConfig::new()
        .map_err(|_| BackendError::ProcessingFailed("WebP config init failed".to_string()))?;
    config.quality = quality as f32;
    config.method = ENCODE_EFFORT;
    config.use_sharp_yuv = 1;

    let encoder = webp::Encoder::from_image(img)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e}")))?;
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e:?}")))?;

    std::fs::write(output, &*memory).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn encode(&self, params: &EncodeParams) -> Result<(), BackendError> {
        let img = to_encodable(load_image(&params.source)?);
        save_webp(&img, &params.output, params.quality.value())
    }
}
