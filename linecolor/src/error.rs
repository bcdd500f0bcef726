//! Error types for the linecolor pipeline

use thiserror::Error;

/// Errors raised while colorizing one image or setting up a batch
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] linecolor_core::Error),

    /// Binarization or line fill failed
    #[error(transparent)]
    Color(#[from] linecolor_color::ColorError),

    /// Region fill failed
    #[error(transparent)]
    Region(#[from] linecolor_region::RegionError),

    /// Edge blending failed
    #[error(transparent)]
    Filter(#[from] linecolor_filter::FilterError),

    /// Reading or writing an image or palette failed
    #[error(transparent)]
    Io(#[from] linecolor_io::IoError),

    /// Options are inconsistent or out of range
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The worker pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
