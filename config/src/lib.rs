//! # Config Crate
//!
//! Centralized numeric tolerances for the intersection kernel.
//! Every threshold the kernel compares against is defined here so that
//! the geometry code never carries its own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_BOUNDARY_TOLERANCE};
//!
//! // Exact comparisons unless a caller opts into slack
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.boundary_tolerance, DEFAULT_BOUNDARY_TOLERANCE);
//! assert_eq!(cfg.boundary_tolerance, 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Exact by Default**: The default boundary tolerance reproduces plain `<` / `>` tests
//! - **Scale Free**: Degeneracy thresholds are relative to edge lengths
//! - **Validated**: Custom tolerances go through `GlobalConfig::new`

pub mod constants;
