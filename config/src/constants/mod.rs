//! Centralized tolerance values shared across the intersection workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Slack applied to the straddle and in-triangle comparisons.
///
/// Zero keeps the comparisons exact: an endpoint counts as on the plane only
/// when its signed distance is exactly `0.0`, and the crossing point must
/// satisfy `x >= 0`, `y >= 0`, `x + y <= 1` without any margin.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BOUNDARY_TOLERANCE;
/// assert_eq!(DEFAULT_BOUNDARY_TOLERANCE, 0.0);
/// ```
pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 0.0;

/// Relative threshold below which a triangle counts as degenerate.
///
/// Compared against `|u x v| / (|u| * |v|)`, the sine of the angle between
/// the two edges, so the test does not depend on the triangle's scale and
/// absorbs the rounding residue left by collinear decimal coordinates.
///
/// # Examples
/// ```
/// use config::constants::{within_scaled_tolerance, DEFAULT_DEGENERATE_TOLERANCE};
/// // |u| * |v| = 0.42, cross product residue from 0.1/0.2/0.3 inputs
/// assert!(within_scaled_tolerance(3.1e-17, 0.42, DEFAULT_DEGENERATE_TOLERANCE));
/// ```
pub const DEFAULT_DEGENERATE_TOLERANCE: f64 = 1.0e-12;

/// Relative threshold below which the 2x2 xy system is singular.
///
/// Compared against `|det| / (|u.xy| * |v.xy|)`, the sine of the angle
/// between the edges' world-xy projections.
///
/// # Examples
/// ```
/// use config::constants::SINGULAR_DETERMINANT_EPSILON;
/// assert!(SINGULAR_DETERMINANT_EPSILON > 0.0);
/// assert!(SINGULAR_DETERMINANT_EPSILON < 1.0e-9);
/// ```
pub const SINGULAR_DETERMINANT_EPSILON: f64 = 1.0e-12;

/// Returns `true` when `value` lies within `tolerance` of zero.
///
/// With a tolerance of `0.0` this is an exact zero test.
///
/// # Examples
/// ```
/// use config::constants::within_tolerance;
/// assert!(within_tolerance(0.0, 0.0));
/// assert!(within_tolerance(-1.0e-7, 1.0e-6));
/// assert!(!within_tolerance(1.0e-7, 0.0));
/// ```
pub fn within_tolerance(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}

/// Returns `true` when `|value| <= tolerance * scale`.
///
/// A zero `scale` only accepts an exact zero `value`.
///
/// # Examples
/// ```
/// use config::constants::within_scaled_tolerance;
/// assert!(within_scaled_tolerance(5.0e-27, 1.0e-14, 1.0e-12));
/// assert!(!within_scaled_tolerance(1.0e-14, 1.0e-14, 1.0e-12));
/// assert!(within_scaled_tolerance(0.0, 0.0, 1.0e-12));
/// ```
pub fn within_scaled_tolerance(value: f64, scale: f64, tolerance: f64) -> bool {
    within_tolerance(value, tolerance * scale)
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tolerances used by the intersection kernel.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.singular_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Slack for the straddle and in-triangle comparisons.
    pub boundary_tolerance: f64,
    /// Relative threshold on the edge cross product magnitude.
    pub degenerate_tolerance: f64,
    /// Relative threshold on the projection determinant.
    pub singular_tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of every tolerance.
    ///
    /// Tolerances must be finite and non-negative.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-9, 1.0e-12, 1.0e-12).expect("valid config");
    /// assert_eq!(cfg.boundary_tolerance, 1.0e-9);
    /// assert!(GlobalConfig::new(-1.0, 0.0, 1.0e-12).is_err());
    /// ```
    pub fn new(
        boundary_tolerance: f64,
        degenerate_tolerance: f64,
        singular_tolerance: f64,
    ) -> Result<Self, ConfigError> {
        validate("boundary_tolerance", boundary_tolerance)?;
        validate("degenerate_tolerance", degenerate_tolerance)?;
        validate("singular_tolerance", singular_tolerance)?;
        Ok(Self {
            boundary_tolerance,
            degenerate_tolerance,
            singular_tolerance,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
            degenerate_tolerance: DEFAULT_DEGENERATE_TOLERANCE,
            singular_tolerance: SINGULAR_DETERMINANT_EPSILON,
        }
    }
}

fn validate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteTolerance { name, value });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeTolerance { name, value });
    }
    Ok(())
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is below zero.
    NegativeTolerance {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Raised when a tolerance is NaN or infinite.
    NonFiniteTolerance {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeTolerance { name, value } => {
                write!(f, "{name} must be >= 0: {value}")
            }
            ConfigError::NonFiniteTolerance { name, value } => {
                write!(f, "{name} must be finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
