//! Per-image WebP conversion and the batch driver.
//!
//! Stage 2 of the pipeline. Each discovered entry goes through the same
//! steps: resolve the output path, pick a quality from the naming
//! policy, measure the source, encode, measure the artifact.
//!
//! ## Failure Model
//!
//! A conversion failure is terminal for its entry only: the error is
//! carried in that entry's [`ConversionResult`] and the batch carries
//! on. There is no retry: a source that fails to encode once will fail
//! the same way again.
//!
//! ## Idempotence
//!
//! Output paths are derived purely from source paths and artifacts
//! overwrite whatever is already there, so re-running the batch over an
//! unchanged directory rewrites the same bytes to the same files.
//!
//! ## Parallelism
//!
//! Entries are independent (distinct output paths, no shared state), so
//! the batch driver encodes them on the rayon pool. Results are
//! collected through the indexed iterator, which keeps them in
//! discovery order for the reporter.

use crate::imaging::{BackendError, EncodeParams, ImageBackend, RustBackend};
use crate::policy::{Classifier, NameClassifier};
use crate::scan::ImageEntry;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Imaging(#[from] BackendError),
}

/// Byte counts measured for one successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub original_bytes: u64,
    pub output_bytes: u64,
}

/// Outcome of converting a single entry.
pub type ConversionResult = Result<Encoded, ConvertError>;

/// Extension of every artifact this tool writes.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Output path for an entry: same directory, same stem, `.webp`.
pub fn output_path(entry: &ImageEntry) -> PathBuf {
    entry.path.with_extension(OUTPUT_EXTENSION)
}

/// Convert one entry to WebP.
pub fn convert_entry(
    backend: &impl ImageBackend,
    classifier: &impl Classifier,
    entry: &ImageEntry,
) -> ConversionResult {
    let output = output_path(entry);
    let quality = classifier.classify(&entry.stem).quality();

    // Source size is read before encoding, so an encode failure cannot
    // leave a half-measured entry behind.
    let original_bytes = fs::metadata(&entry.path)?.len();

    backend.encode(&EncodeParams {
        source: entry.path.clone(),
        output: output.clone(),
        quality,
    })?;

    let output_bytes = fs::metadata(&output)?.len();
    Ok(Encoded {
        original_bytes,
        output_bytes,
    })
}

/// Convert all entries with the production backend and name classifier.
pub fn convert_all(entries: &[ImageEntry]) -> Vec<ConversionResult> {
    convert_all_with(&RustBackend::new(), &NameClassifier, entries)
}

/// Convert entries in parallel using a specific backend and classifier.
///
/// One result per entry, in the same order as `entries`.
pub fn convert_all_with(
    backend: &impl ImageBackend,
    classifier: &impl Classifier,
    entries: &[ImageEntry],
) -> Vec<ConversionResult> {
    entries
        .par_iter()
        .map(|entry| convert_entry(backend, classifier, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use crate::policy::NameClassifier;
    use std::path::Path;
    use tempfile::TempDir;

    fn entry_for(dir: &Path, name: &str) -> ImageEntry {
        let path = dir.join(name);
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        let extension = path.extension().unwrap().to_string_lossy().into_owned();
        ImageEntry {
            path,
            stem,
            extension,
        }
    }

    fn seed(dir: &Path, name: &str, len: usize) -> ImageEntry {
        std::fs::write(dir.join(name), vec![0u8; len]).unwrap();
        entry_for(dir, name)
    }

    #[test]
    fn output_path_swaps_extension() {
        let entry = entry_for(Path::new("/assets"), "banner.png");
        assert_eq!(output_path(&entry), Path::new("/assets/banner.webp"));
    }

    #[test]
    fn output_path_normalizes_uppercase_extension() {
        let entry = entry_for(Path::new("/assets"), "shout.PNG");
        assert_eq!(output_path(&entry), Path::new("/assets/shout.webp"));
    }

    #[test]
    fn quality_follows_classification() {
        let tmp = TempDir::new().unwrap();
        let hero = seed(tmp.path(), "IMG_001.jpg", 10);
        let standard = seed(tmp.path(), "banner.png", 10);

        let backend = MockBackend::new();
        convert_entry(&backend, &NameClassifier, &hero).unwrap();
        convert_entry(&backend, &NameClassifier, &standard).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops[0].quality, 85);
        assert_eq!(ops[1].quality, 80);
    }

    #[test]
    fn captures_sizes_around_the_encode() {
        let tmp = TempDir::new().unwrap();
        let entry = seed(tmp.path(), "photo.jpg", 10);

        let backend = MockBackend::new();
        let encoded = convert_entry(&backend, &NameClassifier, &entry).unwrap();

        // Mock artifacts are 4 bytes.
        assert_eq!(
            encoded,
            Encoded {
                original_bytes: 10,
                output_bytes: 4
            }
        );
    }

    #[test]
    fn missing_source_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let entry = entry_for(tmp.path(), "ghost.jpg");

        let backend = MockBackend::new();
        let result = convert_entry(&backend, &NameClassifier, &entry);
        assert!(matches!(result, Err(ConvertError::Io(_))));
        // The encode was never attempted.
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn overwrites_prior_output() {
        let tmp = TempDir::new().unwrap();
        let entry = seed(tmp.path(), "photo.jpg", 10);
        std::fs::write(tmp.path().join("photo.webp"), vec![0u8; 100]).unwrap();

        let backend = MockBackend::new();
        let encoded = convert_entry(&backend, &NameClassifier, &entry).unwrap();
        assert_eq!(encoded.output_bytes, 4);
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let tmp = TempDir::new().unwrap();
        let entries = vec![
            seed(tmp.path(), "broken.png", 10),
            seed(tmp.path(), "good.jpg", 10),
        ];

        let backend = MockBackend::failing(&["broken.png"]);
        let results = convert_all_with(&backend, &NameClassifier, &entries);

        assert_eq!(results.len(), 2);
        assert!(matches!(&results[0], Err(ConvertError::Imaging(_))));
        assert!(results[1].is_ok());
    }

    #[test]
    fn results_stay_in_entry_order() {
        let tmp = TempDir::new().unwrap();
        let entries: Vec<ImageEntry> = (0..16)
            .map(|i| seed(tmp.path(), &format!("photo-{i:02}.jpg"), 10 + i))
            .collect();

        let backend = MockBackend::new();
        let results = convert_all_with(&backend, &NameClassifier, &entries);

        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.as_ref().unwrap().original_bytes, 10 + i as u64);
        }
    }
}
