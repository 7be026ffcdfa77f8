//! Territory definition loader.
//!
//! Definitions are JSON files with a unique `id`, an optional display
//! `name` and free-text `notes`, and anchor points given either as a
//! top-level `points` list (labels required) or grouped into named
//! `components` for multi-region territories (labels default to
//! `"<component name> N"`).
//!
//! Parsing walks the JSON tree by hand so that every failure names the
//! offending file and point/component index.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;
use crate::model::{AnchorPoint, Territory};

fn schema_err(path: &Path, message: String) -> LoadError {
    LoadError::Schema {
        path: path.to_path_buf(),
        message,
    }
}

/// Parse one list of point objects.
///
/// `label_required` distinguishes top-level points (labels mandatory) from
/// component points (labels default to `"<label_prefix> N"`, 1-based).
fn parse_point_list(
    raw: &Value,
    path: &Path,
    label_required: bool,
    label_prefix: &str,
) -> Result<Vec<AnchorPoint>, LoadError> {
    let list = raw
        .as_array()
        .filter(|a| !a.is_empty())
        .ok_or_else(|| schema_err(path, "must contain a non-empty list of points".into()))?;

    let mut points = Vec::with_capacity(list.len());
    for (idx, pt) in list.iter().enumerate() {
        let obj = pt
            .as_object()
            .ok_or_else(|| schema_err(path, format!("point {idx} must be an object")))?;

        let label = match obj.get("label") {
            Some(v) => v
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| schema_err(path, format!("point {idx} has a non-string label")))?,
            None if label_required => {
                return Err(schema_err(
                    path,
                    format!("point {idx} is missing required field 'label'"),
                ));
            }
            None => format!("{label_prefix} {}", idx + 1),
        };

        let (Some(lat_raw), Some(lon_raw)) = (obj.get("lat"), obj.get("lon")) else {
            return Err(schema_err(
                path,
                format!("point {idx} must contain 'lat' and 'lon'"),
            ));
        };
        let (Some(lat), Some(lon)) = (lat_raw.as_f64(), lon_raw.as_f64()) else {
            return Err(schema_err(
                path,
                format!("point {idx} has a non-numeric lat/lon"),
            ));
        };
        if !lat.is_finite() || !lon.is_finite() {
            return Err(schema_err(
                path,
                format!("point {idx} has a non-finite lat/lon"),
            ));
        }

        points.push(AnchorPoint {
            label,
            latitude_deg: lat,
            longitude_deg: lon,
        });
    }
    Ok(points)
}

/// Load a single territory definition file.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read, [`LoadError::Json`] when
/// it is not valid JSON, [`LoadError::Schema`] when required fields are
/// missing or malformed. Every message names the file; point and component
/// problems also name the offending index.
pub fn load_territory(path: &Path) -> Result<Territory, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let data: Value = serde_json::from_str(&text).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let obj = data
        .as_object()
        .ok_or_else(|| schema_err(path, "must contain a JSON object".into()))?;

    let id = obj
        .get("id")
        .ok_or_else(|| schema_err(path, "missing required field 'id'".into()))?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| schema_err(path, "field 'id' must be a string".into()))?;

    if !obj.contains_key("points") && !obj.contains_key("components") {
        return Err(schema_err(
            path,
            "must contain 'points' or 'components'".into(),
        ));
    }

    let mut points = Vec::new();
    if let Some(raw) = obj.get("points") {
        points.extend(parse_point_list(raw, path, true, "point")?);
    }

    if let Some(raw_components) = obj.get("components") {
        let components = raw_components
            .as_array()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| {
                schema_err(path, "must contain a non-empty list of components".into())
            })?;
        for (c_idx, component) in components.iter().enumerate() {
            let comp = component
                .as_object()
                .ok_or_else(|| schema_err(path, format!("component {c_idx} must be an object")))?;
            let comp_name = match comp.get("name") {
                Some(v) => v.as_str().map(str::to_owned).ok_or_else(|| {
                    schema_err(path, format!("component {c_idx} has a non-string name"))
                })?,
                None => format!("component-{}", c_idx + 1),
            };
            let comp_points = comp.get("points").ok_or_else(|| {
                schema_err(
                    path,
                    format!("component {c_idx} is missing required field 'points'"),
                )
            })?;
            points.extend(parse_point_list(comp_points, path, false, &comp_name)?);
        }
    }

    if points.is_empty() {
        return Err(schema_err(path, "must contain at least one point".into()));
    }

    let name = match obj.get("name") {
        Some(v) => v
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| schema_err(path, "field 'name' must be a string".into()))?,
        None => id.clone(),
    };
    let notes = match obj.get("notes") {
        Some(v) => v
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| schema_err(path, "field 'notes' must be a string".into()))?,
        None => String::new(),
    };

    Ok(Territory {
        id,
        name,
        points,
        notes,
    })
}

/// Load every `*.json` definition in a directory, sorted by file name.
pub fn iter_territories(dir: &Path) -> Result<Vec<Territory>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::Io {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|p| load_territory(p)).collect()
}
