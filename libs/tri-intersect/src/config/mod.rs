//! Kernel-level configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so geometry components can
//! stay decoupled from literal constants.

use ::config::constants::{
    GlobalConfig, DEFAULT_BOUNDARY_TOLERANCE, DEFAULT_DEGENERATE_TOLERANCE,
    SINGULAR_DETERMINANT_EPSILON,
};

use crate::error::IntersectResult;

/// Tolerances used by the frame builder, projector and intersector.
///
/// The default keeps the boundary comparisons exact. The degenerate and
/// singular checks use small thresholds relative to the edge lengths.
///
/// # Examples
/// ```
/// use tri_intersect::IntersectConfig;
/// let cfg = IntersectConfig::default();
/// assert_eq!(cfg.boundary_tolerance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectConfig {
    /// Slack for the straddle and in-triangle comparisons.
    pub boundary_tolerance: f64,
    /// Relative threshold on `|u x v| / (|u| * |v|)` for degenerate triangles.
    pub degenerate_tolerance: f64,
    /// Relative threshold on `|det| / (|u.xy| * |v.xy|)` for singular projections.
    pub singular_tolerance: f64,
}

impl IntersectConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use tri_intersect::IntersectConfig;
    /// let cfg = IntersectConfig::new(1.0e-9, 0.0, 1.0e-12).unwrap();
    /// assert_eq!(cfg.boundary_tolerance, 1.0e-9);
    /// assert!(IntersectConfig::new(-1.0, 0.0, 1.0e-12).is_err());
    /// ```
    pub fn new(
        boundary_tolerance: f64,
        degenerate_tolerance: f64,
        singular_tolerance: f64,
    ) -> IntersectResult<Self> {
        let cfg = GlobalConfig::new(boundary_tolerance, degenerate_tolerance, singular_tolerance)?;
        Ok(Self::from(cfg))
    }

    /// Default configuration with a widened boundary.
    ///
    /// # Examples
    /// ```
    /// use tri_intersect::IntersectConfig;
    /// let cfg = IntersectConfig::with_boundary_tolerance(1.0e-6).unwrap();
    /// assert_eq!(cfg.boundary_tolerance, 1.0e-6);
    /// ```
    pub fn with_boundary_tolerance(tolerance: f64) -> IntersectResult<Self> {
        let defaults = Self::default();
        Self::new(
            tolerance,
            defaults.degenerate_tolerance,
            defaults.singular_tolerance,
        )
    }
}

impl Default for IntersectConfig {
    fn default() -> Self {
        Self {
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
            degenerate_tolerance: DEFAULT_DEGENERATE_TOLERANCE,
            singular_tolerance: SINGULAR_DETERMINANT_EPSILON,
        }
    }
}

impl From<GlobalConfig> for IntersectConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            boundary_tolerance: cfg.boundary_tolerance,
            degenerate_tolerance: cfg.degenerate_tolerance,
            singular_tolerance: cfg.singular_tolerance,
        }
    }
}
