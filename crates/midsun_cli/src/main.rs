use std::path::PathBuf;

use clap::{Parser, Subcommand};
use midsun_batch::{BatchParams, run_batch};
use midsun_geom::latlon_to_unit;
use midsun_report::{archive_witness, write_report};
use midsun_solver::{CoverageConfig, CoverageResult, check_never_sets};
use midsun_territory::{Territory, load_territory};

#[derive(Parser)]
#[command(name = "midsun", about = "Sun-never-sets coverage checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single territory definition file
    Check {
        /// Territory definition (JSON)
        file: PathBuf,
        /// Visibility altitude threshold in degrees
        #[arg(long, default_value_t = 0.0)]
        limit: f64,
        /// Declination step in degrees
        #[arg(long, default_value_t = 0.1)]
        decl_step: f64,
        /// Hour-angle step in degrees
        #[arg(long, default_value_t = 0.1)]
        hour_step: f64,
        /// Report only the first best anchor instead of the full tie set
        #[arg(long)]
        single_best: bool,
        /// Also write report.md and witness.json under this directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Batch-check every territory definition in a directory
    Batch {
        /// Directory containing territory JSON files
        #[arg(long)]
        data: PathBuf,
        /// Output directory
        #[arg(long)]
        out: PathBuf,
        /// Visibility altitude threshold in degrees
        #[arg(long, default_value_t = 0.0)]
        limit: f64,
        /// Declination step in degrees
        #[arg(long, default_value_t = 0.1)]
        decl_step: f64,
        /// Hour-angle step in degrees
        #[arg(long, default_value_t = 0.1)]
        hour_step: f64,
    },
    /// Print the unit surface normal for a latitude/longitude
    Vector {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lon: f64,
    },
}

fn print_result(territory: &Territory, result: &CoverageResult) {
    let status = if result.always_daylight_somewhere {
        "PASS"
    } else {
        "FAIL"
    };
    println!("{} ({}): {status}", territory.name, territory.id);
    println!(
        "  Limit: {:.3} deg  Worst max altitude: {:.3} deg  Margin: {:.3} deg",
        result.limit_altitude_deg,
        result.witness.worst_max_altitude_deg,
        result.margin_altitude_deg
    );
    println!(
        "  Witness: decl {:.3} deg, hour angle {:.3} deg, max dot {:.6}",
        result.witness.decl_deg, result.witness.hour_angle_deg, result.witness.worst_max_dot
    );
    let labels: Vec<&str> = result
        .witness
        .best_point_indices
        .iter()
        .map(|&i| territory.points[i].label.as_str())
        .collect();
    println!("  Best at witness: {}", labels.join(", "));
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            file,
            limit,
            decl_step,
            hour_step,
            single_best,
            out,
        } => {
            let territory = load_territory(&file).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let config = CoverageConfig {
                visibility_limit_deg: limit,
                decl_step_deg: decl_step,
                hour_angle_step_deg: hour_step,
                return_multiple_best_points: !single_best,
                ..CoverageConfig::default()
            };
            let result = check_never_sets(&territory.latlon_pairs(), &config)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            print_result(&territory, &result);

            if let Some(out_dir) = out {
                match write_report(&out_dir, &territory, &result) {
                    Ok(p) => println!("  Report: {}", p.display()),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
                match archive_witness(&out_dir, &territory, &result) {
                    Ok(p) => println!("  Archive: {}", p.display()),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Batch {
            data,
            out,
            limit,
            decl_step,
            hour_step,
        } => {
            let params = BatchParams {
                visibility_limit_deg: limit,
                decl_step_deg: decl_step,
                hour_angle_step_deg: hour_step,
            };
            match run_batch(&data, &out, &params) {
                Ok(summary) => {
                    for t in &summary.territories {
                        let status = if t.pass { "PASS" } else { "FAIL" };
                        println!(
                            "{status}  {} ({})  margin {:.3} deg",
                            t.name, t.id, t.margin_deg
                        );
                    }
                    println!("Summary: {}", out.join("summary.json").display());
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Vector { lat, lon } => {
            let v = latlon_to_unit(lat, lon);
            println!("[{:.9}, {:.9}, {:.9}]", v[0], v[1], v[2]);
        }
    }
}
