//! Machine-readable witness archive.
//!
//! One pretty-printed JSON file per territory, capturing the verdict, the
//! worst-case witness, and the territory definition it was computed from.
//! Floats are serialized with shortest-round-trip precision, so reloading
//! an archive reproduces the verdict, margin, and witness fields exactly.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use midsun_solver::CoverageResult;
use midsun_territory::Territory;

use crate::error::ReportError;

/// Verdict fields of a [`CoverageResult`], minus the witness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub always_daylight_somewhere: bool,
    pub limit_altitude_deg: f64,
    pub limit_dot: f64,
    pub margin_altitude_deg: f64,
}

/// Witness fields, with the winning indices resolved to anchor labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessRecord {
    pub decl_deg: f64,
    pub hour_angle_deg: f64,
    pub worst_max_dot: f64,
    pub worst_max_altitude_deg: f64,
    pub best_point_indices: Vec<usize>,
    pub best_point_labels: Vec<String>,
}

/// The full archival record written as `witness.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessArchive {
    /// RFC 3339 timestamp of when the archive was written.
    pub timestamp_utc: String,
    pub territory: Territory,
    pub result: VerdictRecord,
    pub witness: WitnessRecord,
}

impl WitnessArchive {
    /// Build the archival record for a solve over `territory`'s points.
    ///
    /// The witness indices in `result` must refer to `territory.points`.
    pub fn new(territory: &Territory, result: &CoverageResult) -> Self {
        let w = &result.witness;
        Self {
            timestamp_utc: Utc::now().to_rfc3339(),
            territory: territory.clone(),
            result: VerdictRecord {
                always_daylight_somewhere: result.always_daylight_somewhere,
                limit_altitude_deg: result.limit_altitude_deg,
                limit_dot: result.limit_dot,
                margin_altitude_deg: result.margin_altitude_deg,
            },
            witness: WitnessRecord {
                decl_deg: w.decl_deg,
                hour_angle_deg: w.hour_angle_deg,
                worst_max_dot: w.worst_max_dot,
                worst_max_altitude_deg: w.worst_max_altitude_deg,
                best_point_indices: w.best_point_indices.clone(),
                best_point_labels: w
                    .best_point_indices
                    .iter()
                    .map(|&i| territory.points[i].label.clone())
                    .collect(),
            },
        }
    }
}

/// Write the witness archive to `<out_dir>/<territory id>/witness.json`.
pub fn archive_witness(
    out_dir: &Path,
    territory: &Territory,
    result: &CoverageResult,
) -> Result<PathBuf, ReportError> {
    let tdir = out_dir.join(&territory.id);
    fs::create_dir_all(&tdir).map_err(|e| ReportError::Io {
        path: tdir.clone(),
        message: e.to_string(),
    })?;

    let archive = WitnessArchive::new(territory, result);
    let payload = serde_json::to_string_pretty(&archive).map_err(|e| ReportError::Json {
        path: tdir.join("witness.json"),
        message: e.to_string(),
    })?;

    let path = tdir.join("witness.json");
    fs::write(&path, payload).map_err(|e| ReportError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Read a witness archive back from disk.
pub fn read_witness_archive(path: &Path) -> Result<WitnessArchive, ReportError> {
    let text = fs::read_to_string(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| ReportError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
