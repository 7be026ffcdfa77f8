//! Human-readable Markdown report for a coverage verdict.

use std::fs;
use std::path::{Path, PathBuf};

use midsun_solver::CoverageResult;
use midsun_territory::Territory;

use crate::error::ReportError;

/// Render a Markdown summary of one territory's coverage result.
pub fn render_markdown_report(territory: &Territory, result: &CoverageResult) -> String {
    let status = if result.always_daylight_somewhere {
        "PASS"
    } else {
        "FAIL"
    };
    let w = &result.witness;
    let limit = result.limit_altitude_deg;
    let limit_desc = if limit.abs() < 1e-9 {
        "0.000 deg = geometric sunrise (Sun center above horizon)"
    } else if (limit + 0.833).abs() < 1e-9 {
        "-0.833 deg = common visible sunrise (refraction + solar radius)"
    } else {
        "custom threshold for visible Sun altitude"
    };
    let plain_verdict = if result.always_daylight_somewhere {
        "At least one point in this territory has the Sun above the limit \
         for every achievable Sun direction."
    } else {
        "There exists at least one achievable Sun direction where all points \
         are below the visibility limit."
    };

    let mut out = String::new();
    out.push_str(&format!("# Report: {}\n\n", territory.name));
    out.push_str(&format!("- **ID:** `{}`\n", territory.id));
    out.push_str(&format!("- **Verdict:** **{status}**\n"));
    out.push_str(&format!("- **Plain-language verdict:** {plain_verdict}\n"));
    out.push_str(&format!(
        "- **Visibility limit (altitude):** `{limit:.3} deg` ({limit_desc})\n"
    ));
    out.push_str(&format!(
        "- **Worst-case max altitude:** `{:.3} deg` (highest Sun altitude achievable at the worst Sun direction)\n",
        w.worst_max_altitude_deg
    ));
    out.push_str(&format!(
        "- **Margin:** `{:.3} deg` (worst-case max altitude minus the visibility limit)\n",
        result.margin_altitude_deg
    ));
    out.push_str("\n## Interpretation\n");
    out.push_str(
        "- Margin >= 0 deg means the territory satisfies the \"never sets\" \
         condition for the chosen visibility limit.\n",
    );
    out.push_str("\n## Witness (worst case on sampled grid)\n");
    out.push_str(&format!(
        "- Declination: `{:.3} deg` (tilt of the Sun relative to Earth's equator for this direction)\n",
        w.decl_deg
    ));
    out.push_str(&format!(
        "- Hour angle: `{:.3} deg` (Sun direction relative to local noon)\n",
        w.hour_angle_deg
    ));
    out.push_str(&format!(
        "- Min over grid of max dot: `{:.6}` (minimum across sampled directions of the best anchor's dot value)\n",
        w.worst_max_dot
    ));
    out.push_str("\n## Points (anchors)\n");
    out.push_str(&format!(
        "- Input points: `{}` (add extreme boundary points for higher confidence)\n",
        territory.points.len()
    ));
    for (i, pt) in territory.points.iter().enumerate() {
        let mark = if w.best_point_indices.contains(&i) {
            " <- best at witness"
        } else {
            ""
        };
        out.push_str(&format!(
            "- {i:02}. **{}** (lat `{:.4}`, lon `{:.4}`){mark}\n",
            pt.label, pt.latitude_deg, pt.longitude_deg
        ));
    }

    if !territory.notes.is_empty() {
        out.push_str("\n## Notes\n");
        out.push_str(&territory.notes);
        out.push('\n');
    }

    out.push_str("\n## Glossary\n");
    out.push_str("- **Visibility limit:** altitude threshold used to define a visible Sun.\n");
    out.push_str(
        "- **Worst-case max altitude:** highest Sun altitude achievable at the most challenging Sun direction.\n",
    );
    out.push_str("- **Margin:** worst-case max altitude minus the visibility limit.\n");
    out.push_str("- **Declination:** Sun's angle north/south of Earth's equatorial plane.\n");
    out.push_str("- **Hour angle:** Sun's angular distance from local noon.\n");
    out.push_str(
        "\n> Reminder: results depend on the adequacy of the territory point sampling. \
         Use extreme boundary points (W/E/N/S) and split separated regions into components.\n",
    );
    out
}

/// Write the Markdown report to `<out_dir>/<territory id>/report.md`.
pub fn write_report(
    out_dir: &Path,
    territory: &Territory,
    result: &CoverageResult,
) -> Result<PathBuf, ReportError> {
    let tdir = out_dir.join(&territory.id);
    fs::create_dir_all(&tdir).map_err(|e| ReportError::Io {
        path: tdir.clone(),
        message: e.to_string(),
    })?;
    let path = tdir.join("report.md");
    fs::write(&path, render_markdown_report(territory, result)).map_err(|e| ReportError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use midsun_solver::{CoverageConfig, check_never_sets};
    use midsun_territory::AnchorPoint;
    use tempfile::TempDir;

    fn sample() -> (Territory, CoverageResult) {
        let territory = Territory {
            id: "np".into(),
            name: "North Pole Station".into(),
            points: vec![AnchorPoint {
                label: "Pole".into(),
                latitude_deg: 90.0,
                longitude_deg: 0.0,
            }],
            notes: "single-anchor test territory".into(),
        };
        let config = CoverageConfig {
            decl_step_deg: 1.0,
            hour_angle_step_deg: 1.0,
            ..CoverageConfig::default()
        };
        let result = check_never_sets(&territory.latlon_pairs(), &config).unwrap();
        (territory, result)
    }

    #[test]
    fn report_carries_verdict_and_witness() {
        let (territory, result) = sample();
        let md = render_markdown_report(&territory, &result);
        assert!(md.contains("# Report: North Pole Station"));
        assert!(md.contains("**FAIL**"));
        assert!(md.contains("Declination:"));
        assert!(md.contains("single-anchor test territory"));
    }

    #[test]
    fn best_anchor_is_marked() {
        let (territory, result) = sample();
        let md = render_markdown_report(&territory, &result);
        assert!(md.contains("**Pole**"));
        assert!(md.contains("<- best at witness"));
    }

    #[test]
    fn write_report_places_file_under_territory_id() {
        let (territory, result) = sample();
        let dir = TempDir::new().unwrap();
        let path = write_report(dir.path(), &territory, &result).unwrap();
        assert_eq!(path, dir.path().join("np").join("report.md"));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("**FAIL**"));
    }
}
