use clap::Parser;
use std::path::PathBuf;
use webp_sweep::{convert, report, scan};

#[derive(Parser)]
#[command(name = "webp-sweep")]
#[command(about = "Batch-convert PNG/JPEG images to WebP")]
#[command(long_about = "\
Batch-convert PNG/JPEG images to WebP

Scans a directory for .png/.jpg/.jpeg files and writes a lossy WebP
sibling for each one (photo.jpg → photo.webp). Originals are kept;
existing .webp artifacts are overwritten, so re-running is safe.

Camera exports (IMG_*) and the single-digit carousel slides encode at
quality 85, everything else at 80. A per-file failure is reported and
skipped; the run only aborts if the directory itself cannot be read.")]
#[command(version)]
struct Cli {
    /// Directory to scan; WebP artifacts are written alongside sources
    #[arg(long, default_value = "public")]
    dir: PathBuf,

    /// Encoder threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_thread_pool(cli.threads);

    println!("==> Scanning {}", cli.dir.display());
    let entries = scan::scan(&cli.dir)?;

    let results = convert::convert_all(&entries);
    let pairs: Vec<_> = entries.into_iter().zip(results).collect();
    report::print_report(&pairs);

    Ok(())
}

/// Initialize the rayon thread pool.
///
/// Caps at the number of available cores — users can constrain down,
/// not up.
fn init_thread_pool(threads: usize) {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let threads = if threads == 0 { cores } else { threads.min(cores) };
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
