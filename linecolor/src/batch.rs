//! Directory batch driver
//!
//! Colorizes every image of a directory on a bounded rayon pool. Each image
//! is processed start to finish by one worker with its own random
//! generator, and a failure is reported for that image alone.

use crate::pipeline::{PipelineOptions, colorize};
use crate::{PipelineError, PipelineResult};
use linecolor_core::{ImageFormat, Palette, Pix};
use linecolor_io::{format_for_path, read_image, read_palette, write_image};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Palette file looked up in the working directory when none is given.
pub const DEFAULT_PALETTE: &str = "palette.jpg";

/// Receives finished images.
pub trait PixSink: Sync {
    /// Store `pix` under the input file name `name`.
    fn accept(&self, name: &str, pix: &Pix) -> PipelineResult<()>;
}

/// Writes each image into a directory, encoded per its file extension.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Create a sink for `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> PipelineResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(linecolor_io::IoError::from)?;
        Ok(Self { dir })
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PixSink for DirSink {
    fn accept(&self, name: &str, pix: &Pix) -> PipelineResult<()> {
        let path = self.dir.join(name);
        write_image(pix, &path, format_for_path(&path))?;
        Ok(())
    }
}

/// Per-image statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub width: u32,
    pub height: u32,
    pub region_count: u32,
    /// Pixels painted by the line fill (0 when it is disabled)
    pub line_pixels: u64,
    pub elapsed: Duration,
}

/// Outcome for one input file
#[derive(Debug)]
pub struct ImageReport {
    /// Input file name
    pub name: String,
    pub result: PipelineResult<ImageSummary>,
}

impl ImageReport {
    /// Whether this image was colorized and stored
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Batch settings, usually built from the command line
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    /// Output directory; results overwrite the inputs when `None`
    pub output_dir: Option<PathBuf>,
    pub palette: PathBuf,
    pub options: PipelineOptions,
    /// Base seed; image `i` (in sorted order) uses `seed + i`
    pub seed: Option<u64>,
    /// Worker count; [`default_worker_count`] when `None`
    pub workers: Option<usize>,
}

impl BatchConfig {
    /// Configuration with defaults for everything but the input directory
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: None,
            palette: PathBuf::from(DEFAULT_PALETTE),
            options: PipelineOptions::default(),
            seed: None,
            workers: None,
        }
    }
}

fn load_average() -> Option<f64> {
    let text = fs::read_to_string("/proc/loadavg").ok()?;
    text.split_whitespace().next()?.parse().ok()
}

fn workers_for(cpus: usize, load: f64) -> usize {
    let free = (cpus as f64 - load).floor();
    if free < 1.0 { 1 } else { free as usize }
}

/// Number of workers to use: logical CPUs minus the 1-minute load
/// average, at least 1.
pub fn default_worker_count() -> usize {
    workers_for(num_cpus::get(), load_average().unwrap_or(0.0))
}

/// List the image files of `dir`, sorted by file name.
///
/// Only regular files with a known image extension are returned.
pub fn list_images<P: AsRef<Path>>(dir: P) -> PipelineResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir.as_ref()).map_err(linecolor_io::IoError::from)?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(linecolor_io::IoError::from)?.path();
        if !path.is_file() {
            continue;
        }
        let known = path
            .extension()
            .and_then(|e| e.to_str())
            .map(ImageFormat::from_extension)
            .is_some_and(|f| f != ImageFormat::Unknown);
        if known {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn process_one<S: PixSink + ?Sized>(
    path: &Path,
    name: &str,
    palette: &Palette,
    options: &PipelineOptions,
    rng: &mut StdRng,
    sink: &S,
) -> PipelineResult<ImageSummary> {
    let start = Instant::now();
    let pix = read_image(path)?;
    let out = colorize(&pix, palette, options, rng)?;
    sink.accept(name, &out.pix)?;
    Ok(ImageSummary {
        width: out.pix.width(),
        height: out.pix.height(),
        region_count: out.region_count,
        line_pixels: out.line_fill.map_or(0, |s| s.filled),
        elapsed: start.elapsed(),
    })
}

/// Colorize `paths` on a pool of `workers` threads.
///
/// Reports come back in input order. With a `seed`, image `i` uses
/// `StdRng::seed_from_u64(seed + i)`, so results do not depend on the
/// worker count or scheduling.
///
/// # Errors
///
/// Only setup errors are returned here (zero workers, pool creation).
/// Per-image failures are carried in each [`ImageReport`].
pub fn colorize_batch<S: PixSink + ?Sized>(
    paths: &[PathBuf],
    palette: &Palette,
    options: &PipelineOptions,
    seed: Option<u64>,
    workers: usize,
    sink: &S,
) -> PipelineResult<Vec<ImageReport>> {
    if workers == 0 {
        return Err(PipelineError::InvalidOptions(
            "worker count must be at least 1".to_string(),
        ));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let reports: Vec<ImageReport> = pool.install(|| {
        paths
            .par_iter()
            .enumerate()
            .map(|(i, path)| {
                let name = file_name(path);
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(s.wrapping_add(i as u64)),
                    None => StdRng::from_os_rng(),
                };
                let result = process_one(path, &name, palette, options, &mut rng, sink);
                match &result {
                    Ok(s) => info!(
                        "{}: {}x{}, {} regions, {} line pixels in {:.2?}",
                        name, s.width, s.height, s.region_count, s.line_pixels, s.elapsed
                    ),
                    Err(e) => warn!("{}: {}", name, e),
                }
                ImageReport { name, result }
            })
            .collect()
    });
    Ok(reports)
}

/// Run a whole batch: load the palette, list the input directory and
/// colorize every image into the output directory.
pub fn run(config: &BatchConfig) -> PipelineResult<Vec<ImageReport>> {
    let start = Instant::now();
    let palette = read_palette(&config.palette)?;
    let paths = list_images(&config.input_dir)?;
    let workers = config.workers.unwrap_or_else(default_worker_count);
    let sink = DirSink::new(config.output_dir.as_ref().unwrap_or(&config.input_dir))?;

    info!(
        "colorizing {} images from {} into {} with {} workers ({} palette colors)",
        paths.len(),
        config.input_dir.display(),
        sink.dir().display(),
        workers,
        palette.len()
    );

    let reports = colorize_batch(
        &paths,
        &palette,
        &config.options,
        config.seed,
        workers,
        &sink,
    )?;

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    info!(
        "done: {} ok, {} failed in {:.2?}",
        reports.len() - failed,
        failed,
        start.elapsed()
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_for() {
        assert_eq!(workers_for(8, 0.0), 8);
        assert_eq!(workers_for(8, 2.5), 5);
        assert_eq!(workers_for(4, 9.0), 1);
        assert_eq!(workers_for(1, 0.3), 1);
    }

    #[test]
    fn test_default_worker_count_positive() {
        assert!(default_worker_count() >= 1);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let palette = Palette::new(vec![(1, 2, 3)]).unwrap();
        let sink = DirSink {
            dir: PathBuf::from("."),
        };
        let result = colorize_batch(&[], &palette, &PipelineOptions::default(), None, 0, &sink);
        assert!(matches!(result, Err(PipelineError::InvalidOptions(_))));
    }

    #[test]
    fn test_batch_config_defaults() {
        let config = BatchConfig::new("pages");
        assert_eq!(config.palette, PathBuf::from("palette.jpg"));
        assert!(config.output_dir.is_none());
        assert_eq!(config.options, PipelineOptions::default());
    }
}
