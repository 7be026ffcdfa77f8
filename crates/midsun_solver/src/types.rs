//! Types for the worst-case Sun coverage solver.

use midsun_geom::EARTH_OBLIQUITY_DEG;

/// Configuration for [`check_never_sets`](crate::check_never_sets).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageConfig {
    /// Altitude threshold in degrees above which the Sun counts as visible.
    /// Range: [-90, 90]. 0 = geometric horizon; -0.833 approximates visible
    /// sunrise (refraction + solar radius).
    pub visibility_limit_deg: f64,
    /// Declination grid step in degrees. Must be positive.
    pub decl_step_deg: f64,
    /// Hour-angle grid step in degrees. Must be positive.
    pub hour_angle_step_deg: f64,
    /// Maximum solar declination in degrees; the declination grid spans
    /// [-obliquity, +obliquity]. Range: [0, 90].
    pub obliquity_deg: f64,
    /// Report every anchor tied for best at the witness cell (within
    /// `tie_tol`) instead of just the first.
    pub return_multiple_best_points: bool,
    /// Absolute dot-value tolerance for the best-point tie set.
    /// Must be non-negative.
    pub tie_tol: f64,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            visibility_limit_deg: 0.0,
            decl_step_deg: 0.10,
            hour_angle_step_deg: 0.10,
            obliquity_deg: EARTH_OBLIQUITY_DEG,
            return_multiple_best_points: true,
            tie_tol: 1e-12,
        }
    }
}

impl CoverageConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.decl_step_deg.is_finite() || self.decl_step_deg <= 0.0 {
            return Err("decl_step_deg must be positive");
        }
        if !self.hour_angle_step_deg.is_finite() || self.hour_angle_step_deg <= 0.0 {
            return Err("hour_angle_step_deg must be positive");
        }
        if !self.obliquity_deg.is_finite()
            || !(0.0..=90.0).contains(&self.obliquity_deg)
        {
            return Err("obliquity_deg must be within [0, 90]");
        }
        if !self.visibility_limit_deg.is_finite()
            || !(-90.0..=90.0).contains(&self.visibility_limit_deg)
        {
            return Err("visibility_limit_deg must be within [-90, 90]");
        }
        if self.tie_tol.is_nan() || self.tie_tol < 0.0 {
            return Err("tie_tol must be non-negative");
        }
        Ok(())
    }
}

/// The worst-case Sun direction found by the grid search, with the anchor
/// points that are optimal there.
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    /// Declination of the worst-case grid cell in degrees.
    pub decl_deg: f64,
    /// Hour angle of the worst-case grid cell in degrees, [0, 360).
    pub hour_angle_deg: f64,
    /// Best achievable dot value at the worst-case cell (min over the grid
    /// of the per-cell max over anchors).
    pub worst_max_dot: f64,
    /// `asin(worst_max_dot)` in degrees: the highest Sun altitude any anchor
    /// reaches at the worst-case direction.
    pub worst_max_altitude_deg: f64,
    /// Indices of the anchors achieving the per-cell maximum at the witness
    /// cell, ascending. Always non-empty.
    pub best_point_indices: Vec<usize>,
}

/// Immutable verdict of a coverage check.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    /// True when at least one anchor keeps the Sun at or above the limit for
    /// every sampled Sun direction.
    pub always_daylight_somewhere: bool,
    /// The visibility limit in degrees, as supplied.
    pub limit_altitude_deg: f64,
    /// Sine of the visibility limit; the dot value the worst case must beat.
    pub limit_dot: f64,
    /// The worst-case grid cell and the anchors optimal there.
    pub witness: Witness,
    /// `worst_max_altitude_deg - limit_altitude_deg`; non-negative iff the
    /// check passes (up to the verdict tolerance on the dot comparison).
    pub margin_altitude_deg: f64,
}
