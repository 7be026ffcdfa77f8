//! Geometry primitives for Sun-coverage checks.
//!
//! Anchor points and Sun directions both map to unit vectors in the same
//! equatorial frame: the x-y plane is the equatorial plane, +z the north
//! polar axis. In that shared frame the dot product of a point's surface
//! normal with a Sun-direction vector equals the sine of the Sun's altitude
//! above that point's local horizon, which is what makes the coverage
//! solver's reductions meaningful.

/// Earth's axial tilt in degrees (IAU 2006 obliquity at J2000.0).
///
/// Bounds the solar declination reachable over a year.
pub const EARTH_OBLIQUITY_DEG: f64 = 23.439281;

/// Convert a geographic (latitude, longitude) pair in degrees to a unit
/// vector on the sphere.
///
/// `x = cos(lat)·cos(lon), y = cos(lat)·sin(lon), z = sin(lat)`.
///
/// No error conditions; callers must pre-validate finiteness and range.
pub fn latlon_to_unit(lat_deg: f64, lon_deg: f64) -> [f64; 3] {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let clat = lat.cos();
    [clat * lon.cos(), clat * lon.sin(), lat.sin()]
}

/// Convert a Sun direction parameterized by declination and hour angle
/// (both degrees) to a unit vector in the same frame as [`latlon_to_unit`].
///
/// Hour angle is a rotation about the polar axis; declination is the Sun's
/// elevation above the equatorial plane.
pub fn sun_direction(decl_deg: f64, hour_angle_deg: f64) -> [f64; 3] {
    let d = decl_deg.to_radians();
    let h = hour_angle_deg.to_radians();
    let cd = d.cos();
    [cd * h.cos(), cd * h.sin(), d.sin()]
}

/// Dot product of two 3-vectors.
///
/// For two unit vectors this is the cosine of the angle between them; for a
/// surface normal and a Sun direction it equals the sine of solar altitude.
pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
