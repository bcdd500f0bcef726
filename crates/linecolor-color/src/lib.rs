//! linecolor-color - Binarization and line filling
//!
//! - **Thresholding** ([`threshold`]): luminance threshold to a 1 bpp
//!   foreground mask, and back to gray for inspection
//! - **Line fill** ([`linefill`]): paints every still-uncolored canvas
//!   pixel with the color of its nearest colored neighbor

pub mod error;
pub mod linefill;
pub mod threshold;

pub use error::{ColorError, ColorResult};
pub use linefill::{LineFillStats, fill_lines};
pub use threshold::{binary_to_gray, threshold_to_binary, validate_threshold};
