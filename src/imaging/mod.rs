//! WebP encoding, fully statically linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG)** | `image` crate (pure Rust decoders) |
//! | **Encode → WebP** | `webp` crate (libwebp, `encode_advanced`) |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing an encode operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use params::{EncodeParams, Quality};
pub use rust_backend::RustBackend;
