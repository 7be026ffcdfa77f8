//! Scenario tests for the coverage solver.
//!
//! Each scenario pins down one of the reductions: min-over-declination,
//! max-over-points, and the witness/tie-break rules, using territories whose
//! worst case is known analytically.

use midsun_solver::{CoverageConfig, check_never_sets};

fn config(decl_step: f64, hour_step: f64) -> CoverageConfig {
    CoverageConfig {
        decl_step_deg: decl_step,
        hour_angle_step_deg: hour_step,
        ..CoverageConfig::default()
    }
}

/// A single anchor at the North Pole sees the Sun at an altitude equal to
/// the declination, for every hour angle. The min-over-declination reduction
/// must therefore land on the most negative sampled declination, and the
/// check fails for any grid that samples below the horizon.
#[test]
fn north_pole_fails_at_winter_declination() {
    let res = check_never_sets(&[(90.0, 0.0)], &config(0.5, 1.0)).unwrap();

    assert!(!res.always_daylight_somewhere);
    // The grid starts exactly at -obliquity.
    assert!((res.witness.decl_deg + 23.439281).abs() < 1e-12);
    assert!((res.witness.worst_max_altitude_deg + 23.439281).abs() < 1e-6);
    assert!((res.margin_altitude_deg + 23.439281).abs() < 1e-6);
    assert_eq!(res.witness.best_point_indices, vec![0]);
}

/// With a positive obliquity excluded (obliquity 0), the pole anchor sits
/// exactly on the horizon for the single sampled declination and the
/// boundary tolerance turns that into a pass.
#[test]
fn north_pole_passes_with_zero_obliquity() {
    let mut c = config(0.5, 1.0);
    c.obliquity_deg = 0.0;
    let res = check_never_sets(&[(90.0, 0.0)], &c).unwrap();
    assert!(res.always_daylight_somewhere);
    assert!(res.margin_altitude_deg.abs() < 1e-6);
}

/// Two antipodal equatorial anchors: whichever side the Sun is on, one of
/// the two faces it, so the per-cell max dot is |n·s| >= 0 everywhere.
/// Exercises the max-over-points reduction picking the better anchor per
/// cell; the worst case sits on the terminator with zero margin.
#[test]
fn antipodal_pair_always_covers_the_horizon() {
    let res = check_never_sets(&[(0.0, 0.0), (0.0, 180.0)], &config(1.0, 1.0)).unwrap();

    assert!(res.always_daylight_somewhere);
    assert!(
        res.witness.worst_max_dot >= 0.0,
        "max-reduction must keep the better anchor, got {}",
        res.witness.worst_max_dot
    );
    assert!(res.margin_altitude_deg.abs() < 1e-6);
}

/// Dropping one of the antipodal anchors must flip the verdict: a single
/// equatorial point is in darkness for roughly half of all Sun directions.
#[test]
fn single_equatorial_anchor_fails() {
    let res = check_never_sets(&[(0.0, 0.0)], &config(1.0, 1.0)).unwrap();
    assert!(!res.always_daylight_somewhere);
    assert!(res.margin_altitude_deg < -80.0);
}

/// A spread of high-latitude summer-side anchors still fails on the winter
/// declination, but by less than a lone pole anchor.
#[test]
fn high_latitude_ring_improves_but_does_not_pass() {
    let ring = [(78.0, 0.0), (78.0, 90.0), (78.0, 180.0), (78.0, -90.0)];
    let res = check_never_sets(&ring, &config(0.5, 1.0)).unwrap();
    let pole = check_never_sets(&[(90.0, 0.0)], &config(0.5, 1.0)).unwrap();

    assert!(!res.always_daylight_somewhere);
    assert!(res.margin_altitude_deg > pole.margin_altitude_deg);
}

/// Worst-case declination for a northern-hemisphere territory is on the
/// winter side of the grid.
#[test]
fn northern_territory_worst_case_is_southern_declination() {
    let pts = [(61.0, 5.0), (68.0, 15.0), (71.0, 25.0)];
    let res = check_never_sets(&pts, &config(0.5, 1.0)).unwrap();
    assert!(res.witness.decl_deg < 0.0);
}

/// The verdict, margin, and witness must be identical across calls: the
/// solver is a pure function of its inputs.
#[test]
fn deterministic_across_calls() {
    let pts = [(48.8, 2.3), (-21.1, 55.5), (16.0, -61.5), (-17.5, -149.5)];
    let a = check_never_sets(&pts, &config(0.5, 0.5)).unwrap();
    let b = check_never_sets(&pts, &config(0.5, 0.5)).unwrap();
    assert_eq!(a, b);
}

/// A widely spread territory (anchors near both tropics and both
/// hemispheres, like an empire spanning the globe) passes at the default
/// horizon limit.
#[test]
fn globe_spanning_territory_passes() {
    let pts = [
        (48.8, 2.3),    // western Europe
        (-21.1, 55.5),  // Indian Ocean
        (16.0, -61.5),  // Caribbean
        (-17.5, -149.5), // south Pacific
        (12.8, 45.0),   // Arabian Sea
    ];
    let res = check_never_sets(&pts, &config(0.25, 0.25)).unwrap();
    assert!(res.always_daylight_somewhere);
    assert!(res.margin_altitude_deg > 0.0);
}

/// Raising the visibility limit high enough must flip a passing territory
/// to failing while the witness stays on a sampled cell.
#[test]
fn stricter_limit_flips_verdict() {
    let pts = [(0.0, 0.0), (0.0, 180.0)];
    let mut c = config(1.0, 1.0);
    c.visibility_limit_deg = 10.0;
    let res = check_never_sets(&pts, &c).unwrap();

    assert!(!res.always_daylight_somewhere);
    assert!(res.margin_altitude_deg < 0.0);
    // Witness cell is an actually-sampled grid point.
    assert!(res.witness.decl_deg >= -c.obliquity_deg - 1e-12);
    assert!(res.witness.decl_deg <= c.obliquity_deg + 1e-12);
    assert!(res.witness.hour_angle_deg >= 0.0 && res.witness.hour_angle_deg < 360.0);
}
