//! linecolor-test - Regression test harness
//!
//! Tests build their fixtures in code and check results with
//! [`RegParams`], which counts checks, records every failure and reports
//! them together in [`RegParams::cleanup`].
//!
//! ```ignore
//! use linecolor_test::RegParams;
//!
//! let mut rp = RegParams::new("regionfill");
//! rp.compare_values(3.0, fill.region_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to also write intermediate images to
//!   `tests/regout` for visual inspection.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // linecolor-test is at crates/linecolor-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
