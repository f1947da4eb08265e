//! # webp-sweep
//!
//! A batch WebP transcoder for web asset directories. Point it at a
//! directory of PNG/JPEG images and it writes a lossy WebP sibling for
//! each one, then reports how much space the conversion saved.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      public/      →  Vec<ImageEntry>    (directory listing → entries)
//! 2. Convert   entries      →  *.webp artifacts   (one encode per entry)
//! 3. Report    results      →  stdout             (per-file lines + summary)
//! ```
//!
//! Discovery completes fully before any encoding starts. Each entry is
//! converted independently; a failed encode is reported with its cause
//! and the batch carries on. Only an unlistable source directory aborts
//! the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists the target directory and filters to recognized image extensions |
//! | [`policy`] | Quality classification from the image naming convention |
//! | [`convert`] | Stage 2 — per-entry WebP conversion and the parallel batch driver |
//! | [`report`] | Stage 3 — per-file output lines and the aggregate savings summary |
//! | [`imaging`] | Encoding seam: `ImageBackend` trait, parameters, libwebp-based backend |
//!
//! # Design Decisions
//!
//! ## WebP-Only Output
//!
//! All artifacts are lossy WebP, written alongside their sources with the
//! extension swapped. A single modern format keeps the output directory
//! flat and makes re-runs trivially idempotent: the same input always
//! produces the same artifact at the same path.
//!
//! ## Name-Driven Quality
//!
//! Quality is decided from the base name alone: camera-exported hero
//! shots (`IMG_*` and the single-digit carousel slots) encode at 85,
//! everything else at 80. The rule lives behind [`policy::Classifier`]
//! so a metadata-driven classifier can replace it without touching the
//! pipeline shape.
//!
//! ## Self-Contained Imaging (No sharp, No ImageMagick)
//!
//! Decoding uses the `image` crate's pure-Rust JPEG/PNG decoders and
//! encoding uses libwebp statically linked through the `webp` crate. No
//! Node runtime, no system codecs, no version conflicts: the binary is a
//! single file that works anywhere.

pub mod convert;
pub mod imaging;
pub mod policy;
pub mod report;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
