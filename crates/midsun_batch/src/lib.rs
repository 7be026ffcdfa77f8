//! Batch driver: run the coverage check over every territory definition in
//! a directory, writing per-territory reports and witness archives plus a
//! run-level summary index.
//!
//! A failure on any territory aborts the whole batch; per-item errors are
//! never swallowed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use midsun_report::{archive_witness, write_report};
use midsun_solver::{CoverageConfig, check_never_sets};
use midsun_territory::iter_territories;

pub mod error;

pub use error::BatchError;

/// Shared solve parameters for one batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchParams {
    /// Altitude threshold in degrees, applied to every territory.
    pub visibility_limit_deg: f64,
    /// Declination grid step in degrees.
    pub decl_step_deg: f64,
    /// Hour-angle grid step in degrees.
    pub hour_angle_step_deg: f64,
}

impl Default for BatchParams {
    fn default() -> Self {
        let c = CoverageConfig::default();
        Self {
            visibility_limit_deg: c.visibility_limit_deg,
            decl_step_deg: c.decl_step_deg,
            hour_angle_step_deg: c.hour_angle_step_deg,
        }
    }
}

impl BatchParams {
    fn coverage_config(&self) -> CoverageConfig {
        CoverageConfig {
            visibility_limit_deg: self.visibility_limit_deg,
            decl_step_deg: self.decl_step_deg,
            hour_angle_step_deg: self.hour_angle_step_deg,
            ..CoverageConfig::default()
        }
    }
}

/// One line of the run-level index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritorySummary {
    pub id: String,
    pub name: String,
    pub pass: bool,
    pub worst_altitude_deg: f64,
    pub margin_deg: f64,
    pub witness_decl_deg: f64,
    pub witness_hour_angle_deg: f64,
}

/// The run-level index written as `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub data_dir: String,
    pub out_dir: String,
    pub visibility_limit_deg: f64,
    pub decl_step_deg: f64,
    pub hour_angle_step_deg: f64,
    pub territories: Vec<TerritorySummary>,
}

/// Check every territory definition in `data_dir`, writing reports and
/// witness archives under `out_dir` and a `summary.json` index at its root.
///
/// Territories are processed in file-name order. The first loader, solver,
/// or writer error aborts the run.
pub fn run_batch(
    data_dir: &Path,
    out_dir: &Path,
    params: &BatchParams,
) -> Result<BatchSummary, BatchError> {
    fs::create_dir_all(out_dir).map_err(|e| BatchError::Io {
        path: out_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let config = params.coverage_config();
    let mut territories = Vec::new();

    for territory in iter_territories(data_dir)? {
        let result = check_never_sets(&territory.latlon_pairs(), &config)?;
        write_report(out_dir, &territory, &result)?;
        archive_witness(out_dir, &territory, &result)?;
        territories.push(TerritorySummary {
            id: territory.id.clone(),
            name: territory.name.clone(),
            pass: result.always_daylight_somewhere,
            worst_altitude_deg: result.witness.worst_max_altitude_deg,
            margin_deg: result.margin_altitude_deg,
            witness_decl_deg: result.witness.decl_deg,
            witness_hour_angle_deg: result.witness.hour_angle_deg,
        });
    }

    let summary = BatchSummary {
        data_dir: data_dir.display().to_string(),
        out_dir: out_dir.display().to_string(),
        visibility_limit_deg: params.visibility_limit_deg,
        decl_step_deg: params.decl_step_deg,
        hour_angle_step_deg: params.hour_angle_step_deg,
        territories,
    };

    let summary_path = out_dir.join("summary.json");
    let payload =
        serde_json::to_string_pretty(&summary).map_err(|e| BatchError::Io {
            path: summary_path.clone(),
            message: e.to_string(),
        })?;
    fs::write(&summary_path, payload).map_err(|e| BatchError::Io {
        path: summary_path,
        message: e.to_string(),
    })?;

    Ok(summary)
}
