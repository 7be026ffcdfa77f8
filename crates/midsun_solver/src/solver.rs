//! Worst-case Sun coverage solver.
//!
//! Brute-force grid search over declination × hour angle. For every sampled
//! Sun direction the best anchor wins (max over points); the search then
//! finds the single most adverse direction (min over hour angles, then min
//! over declinations) and reports whether the territory's best point still
//! sees the Sun at or above the visibility limit at that moment.
//!
//! The reduction order is the contract: max over points, min over hour
//! angle, min over declination. Ties in the min reductions go to the first
//! (lowest-indexed) grid sample; the best-point argmax goes to the first
//! index. Grid resolution is an accuracy/cost knob, not a correctness
//! parameter: the reported witness is always an actually-sampled cell.

use midsun_geom::{dot, latlon_to_unit, sun_direction};

use crate::error::CoverageError;
use crate::types::{CoverageConfig, CoverageResult, Witness};

/// Absolute tolerance for the verdict comparison of `worst_max_dot` against
/// `limit_dot`. Grid sampling and floating-point trig can place a true
/// boundary case marginally on either side; exact-boundary territories must
/// not flip verdict across equivalent implementations.
const VERDICT_DOT_TOL: f64 = 1e-15;

/// Slack added to the declination grid's upper bound so that an endpoint
/// reached exactly by `start + i·step` is not lost to rounding.
const GRID_END_TOL: f64 = 1e-12;

/// Uniform declination samples over [-obliquity, +obliquity].
///
/// Endpoint policy: sample `i` is `-obliquity + i·step` (computed directly,
/// not by accumulated addition) and is kept while it stays below
/// `obliquity + 1e-12`. The upper endpoint is therefore included whenever
/// the step divides the span to within that slack, and never double-counted.
fn decl_grid(obliquity_deg: f64, step_deg: f64) -> Vec<f64> {
    let start = -obliquity_deg;
    let stop = obliquity_deg + GRID_END_TOL;
    let mut grid = Vec::new();
    let mut i = 0u64;
    loop {
        let v = start + (i as f64) * step_deg;
        if v >= stop {
            break;
        }
        grid.push(v);
        i += 1;
    }
    grid
}

/// Uniform hour-angle samples over [0, 360), upper bound exclusive.
///
/// 360° wraps to 0°, so the endpoint must not be double-counted.
fn hour_angle_grid(step_deg: f64) -> Vec<f64> {
    let mut grid = Vec::new();
    let mut i = 0u64;
    loop {
        let v = (i as f64) * step_deg;
        if v >= 360.0 {
            break;
        }
        grid.push(v);
        i += 1;
    }
    grid
}

fn validate_points(points: &[(f64, f64)]) -> Result<(), CoverageError> {
    if points.is_empty() {
        return Err(CoverageError::EmptyTerritory);
    }
    for (index, &(lat, lon)) in points.iter().enumerate() {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoverageError::InvalidPoint {
                index,
                reason: "latitude/longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoverageError::InvalidPoint {
                index,
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoverageError::InvalidPoint {
                index,
                reason: "longitude must be within [-180, 180]",
            });
        }
    }
    Ok(())
}

/// Check whether at least one anchor point always has the Sun at or above
/// the visibility limit, for every sampled Sun direction.
///
/// `points` are (latitude, longitude) pairs in degrees; indices into this
/// slice are reported back in the witness. The function is pure: no side
/// effects, no shared state, and all validation happens before any
/// computation.
///
/// # Errors
///
/// [`CoverageError`] when `points` is empty, a coordinate is non-finite or
/// out of range, or the configuration violates its contract. No partial
/// result is ever returned.
pub fn check_never_sets(
    points: &[(f64, f64)],
    config: &CoverageConfig,
) -> Result<CoverageResult, CoverageError> {
    config.validate().map_err(CoverageError::InvalidConfig)?;
    validate_points(points)?;

    let normals: Vec<[f64; 3]> = points
        .iter()
        .map(|&(lat, lon)| latlon_to_unit(lat, lon))
        .collect();
    let limit_dot = config.visibility_limit_deg.to_radians().sin();

    let decls = decl_grid(config.obliquity_deg, config.decl_step_deg);
    let hours = hour_angle_grid(config.hour_angle_step_deg);

    // Hour-angle trig is shared across all declinations.
    let hour_trig: Vec<(f64, f64)> = hours
        .iter()
        .map(|&h| {
            let r = h.to_radians();
            (r.cos(), r.sin())
        })
        .collect();

    let mut worst_max_dot = f64::INFINITY;
    let mut witness_decl_deg = 0.0;
    let mut witness_hour_deg = 0.0;

    for &decl in &decls {
        let d = decl.to_radians();
        let (cd, sd) = (d.cos(), d.sin());

        // Worst moment of the day for this declination: min over hour
        // angles of the per-cell best anchor. First hour angle wins ties.
        let mut min_max_dot = f64::INFINITY;
        let mut min_hour_deg = 0.0;
        for (hi, &(ch, sh)) in hour_trig.iter().enumerate() {
            let sun = [cd * ch, cd * sh, sd];
            let mut max_dot = f64::NEG_INFINITY;
            for n in &normals {
                let dp = dot(n, &sun);
                if dp > max_dot {
                    max_dot = dp;
                }
            }
            if max_dot < min_max_dot {
                min_max_dot = max_dot;
                min_hour_deg = hours[hi];
            }
        }

        // First declination wins ties; co-minimal declinations are not
        // enumerated.
        if min_max_dot < worst_max_dot {
            worst_max_dot = min_max_dot;
            witness_decl_deg = decl;
            witness_hour_deg = min_hour_deg;
        }
    }

    // Witness anchor set at the winning cell. Recomputing the column repeats
    // the exact operations of the scan, so `best` equals `worst_max_dot`.
    let sun_w = sun_direction(witness_decl_deg, witness_hour_deg);
    let column: Vec<f64> = normals.iter().map(|n| dot(n, &sun_w)).collect();
    let best = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let best_point_indices: Vec<usize> = if config.return_multiple_best_points {
        column
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d >= best - config.tie_tol)
            .map(|(i, _)| i)
            .collect()
    } else {
        let mut arg = 0;
        for (i, &d) in column.iter().enumerate() {
            if d > column[arg] {
                arg = i;
            }
        }
        vec![arg]
    };

    let worst_max_altitude_deg = worst_max_dot.clamp(-1.0, 1.0).asin().to_degrees();
    let always = worst_max_dot > limit_dot
        || (worst_max_dot - limit_dot).abs() <= VERDICT_DOT_TOL;

    Ok(CoverageResult {
        always_daylight_somewhere: always,
        limit_altitude_deg: config.visibility_limit_deg,
        limit_dot,
        witness: Witness {
            decl_deg: witness_decl_deg,
            hour_angle_deg: witness_hour_deg,
            worst_max_dot,
            worst_max_altitude_deg,
            best_point_indices,
        },
        margin_altitude_deg: worst_max_altitude_deg - config.visibility_limit_deg,
    })
}
