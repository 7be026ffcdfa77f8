//! Territory definition model.

use serde::{Deserialize, Serialize};

/// One labeled anchor point of a territory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// Human-readable label, e.g. a place name.
    pub label: String,
    /// Latitude in degrees, north positive. Range: [-90, 90].
    #[serde(rename = "lat")]
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    #[serde(rename = "lon")]
    pub longitude_deg: f64,
}

/// A territory: an identifier, a display name, and the anchor points whose
/// Sun visibility is tracked.
///
/// Point order is preserved; solver witnesses refer back to it by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    /// Unique identifier (also the per-territory output directory name).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Anchor points, in definition order. Never empty after loading.
    pub points: Vec<AnchorPoint>,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl Territory {
    /// The (latitude, longitude) pairs in point order, as the solver
    /// consumes them.
    pub fn latlon_pairs(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.latitude_deg, p.longitude_deg))
            .collect()
    }
}
