//! linecolor-filter - Post-fill filtering
//!
//! Currently a single pass, [`blend_edges`], which softens the hard seams
//! between differently colored regions.

pub mod blend;
mod error;

pub use blend::blend_edges;
pub use error::{FilterError, FilterResult};
