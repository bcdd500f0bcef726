// CLI entry for linecolor
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueHint};
use linecolor::batch::DEFAULT_PALETTE;
use linecolor::{BatchConfig, PipelineOptions, run};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linecolor", version, about = "Flat-color every page of a line-art directory")]
struct Cli {
    /// Directory of input images
    #[arg(value_hint = ValueHint::DirPath)]
    input_dir: PathBuf,

    /// Output directory (defaults to overwriting the inputs)
    #[arg(short = 'o', long = "output", value_hint = ValueHint::DirPath)]
    output_dir: Option<PathBuf>,

    /// Palette image, or a .txt file with one color per line
    #[arg(short = 'p', long = "palette", default_value = DEFAULT_PALETTE, value_hint = ValueHint::FilePath)]
    palette: PathBuf,

    /// Luminance threshold (0-255); brighter pixels are filled regions
    #[arg(short = 't', long = "threshold", default_value_t = 160, allow_negative_numbers = true)]
    threshold: i64,

    /// Blend colors across region seams
    #[arg(long = "blend", action = ArgAction::SetTrue)]
    blend: bool,

    /// Leave line pixels uncolored
    #[arg(long = "no-fill-lines", action = ArgAction::SetTrue)]
    no_fill_lines: bool,

    /// Base random seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Number of worker threads
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,
}

fn build_config(cli: Cli) -> Result<BatchConfig> {
    let options = PipelineOptions::new()
        .with_threshold(cli.threshold)?
        .with_blend(cli.blend)
        .with_fill_lines(!cli.no_fill_lines);
    if cli.jobs == Some(0) {
        bail!("--jobs must be at least 1");
    }

    let mut cfg = BatchConfig::new(cli.input_dir);
    cfg.output_dir = cli.output_dir;
    cfg.palette = cli.palette;
    cfg.options = options;
    cfg.seed = cli.seed;
    cfg.workers = cli.jobs;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let cfg = build_config(cli)?;

    let reports = run(&cfg)
        .with_context(|| format!("failed to colorize {}", cfg.input_dir.display()))?;

    let failed: Vec<_> = reports.iter().filter(|r| !r.is_ok()).collect();
    if !failed.is_empty() {
        bail!("{} of {} images failed", failed.len(), reports.len());
    }
    info!("all {} images colorized", reports.len());
    Ok(())
}
