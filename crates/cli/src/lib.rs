//! Command-line surface for the pathwise engines.
//!
//! Feeds JSON files from disk through the scoring, recommendation, and
//! layout engines and prints the results as a text report or JSON. The
//! engines never touch files themselves; everything I/O-shaped happens
//! here.

pub mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pathwise_catalog::{parse_roles, parse_skills, parse_tree};
use pathwise_fit::{aggregate_missing_skills, compute_fit, project_recommendations};
use pathwise_layout::{layout_fan3d, layout_radial};
use pathwise_recommend::compute_recommendations;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Career-fit scoring and mind-map layout over JSON inputs.
#[derive(Debug, Parser)]
#[command(name = "pathwise", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a skill profile against a role catalog.
    Fit(FitArgs),
    /// Compute node positions for a mind-map tree.
    Layout(LayoutArgs),
}

#[derive(Debug, Args)]
struct FitArgs {
    /// Path to the user skills JSON (array of {name, confidence}).
    #[arg(long)]
    skills: PathBuf,
    /// Path to the role catalog JSON.
    #[arg(long)]
    roles: PathBuf,
    /// Emit JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct LayoutArgs {
    /// Path to the mind-map tree JSON.
    #[arg(long)]
    tree: PathBuf,
    /// Horizontal center of the 2D layout.
    #[arg(long, default_value_t = 400.0)]
    center_x: f64,
    /// Vertical center of the 2D layout.
    #[arg(long, default_value_t = 300.0)]
    center_y: f64,
    /// Use the 3D fan projection instead of the 2D radial layout.
    #[arg(long)]
    three_d: bool,
}

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Fit(args) => run_fit(&args)?,
        Command::Layout(args) => run_layout(&args)?,
    };
    println!("{output}");
    Ok(())
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))
}

fn run_fit(args: &FitArgs) -> Result<String> {
    let profile = parse_skills(&read_input(&args.skills, "skills")?)
        .with_context(|| format!("invalid skills file {}", args.skills.display()))?;
    let roles = parse_roles(&read_input(&args.roles, "roles")?)
        .with_context(|| format!("invalid roles file {}", args.roles.display()))?;

    debug!(
        skills = profile.len(),
        roles = roles.len(),
        "running fit scoring"
    );

    let results = compute_fit(profile.skills(), &roles);
    let recommendations = compute_recommendations(&results);
    let missing = aggregate_missing_skills(&results);
    let projects = project_recommendations(&results);

    if args.json {
        let payload = json!({
            "results": results,
            "recommendations": recommendations,
            "missing_skills": missing,
            "projects": projects,
        });
        Ok(serde_json::to_string_pretty(&payload)?)
    } else {
        Ok(render::fit_report(
            &results,
            &recommendations,
            &missing,
            &projects,
        ))
    }
}

fn run_layout(args: &LayoutArgs) -> Result<String> {
    let tree = parse_tree(&read_input(&args.tree, "tree")?)
        .with_context(|| format!("invalid tree file {}", args.tree.display()))?;

    debug!(nodes = tree.node_count(), three_d = args.three_d, "running layout");

    if args.three_d {
        let positions = layout_fan3d(&tree);
        Ok(serde_json::to_string_pretty(&positions)?)
    } else {
        let positions = layout_radial(&tree, args.center_x, args.center_y);
        Ok(serde_json::to_string_pretty(&positions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    fn scenario_files() -> (tempfile::NamedTempFile, tempfile::NamedTempFile) {
        let skills = write_temp(
            r#"[{"name":"Python","confidence":80},{"name":"SQL","confidence":50}]"#,
        );
        let roles = write_temp(
            r#"[{
                "id": "r1",
                "role_name": "Data Analyst",
                "description": "Analyzes data",
                "skills": [
                    {"skill_name": "Python", "weight": 0.5},
                    {"skill_name": "SQL", "weight": 0.3},
                    {"skill_name": "Excel", "weight": 0.2}
                ],
                "projects": []
            }]"#,
        );
        (skills, roles)
    }

    #[test]
    fn test_fit_text_report() {
        let (skills, roles) = scenario_files();
        let args = FitArgs {
            skills: skills.path().to_path_buf(),
            roles: roles.path().to_path_buf(),
            json: false,
        };

        let output = run_fit(&args).unwrap();
        assert!(output.contains("#1 Data Analyst - 55% (moderate fit)"));
        assert!(output.contains("Excel: 55% -> 71% (+16%) for Data Analyst"));
    }

    #[test]
    fn test_fit_json_output() {
        let (skills, roles) = scenario_files();
        let args = FitArgs {
            skills: skills.path().to_path_buf(),
            roles: roles.path().to_path_buf(),
            json: true,
        };

        let output = run_fit(&args).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(payload["results"][0]["fit_score"], 55);
        assert_eq!(payload["recommendations"][0]["skill_name"], "Excel");
        assert_eq!(payload["missing_skills"][0], "Excel");
    }

    #[test]
    fn test_fit_missing_file_errors() {
        let (_, roles) = scenario_files();
        let args = FitArgs {
            skills: PathBuf::from("/nonexistent/skills.json"),
            roles: roles.path().to_path_buf(),
            json: false,
        };

        let err = run_fit(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read skills"));
    }

    #[test]
    fn test_layout_radial_output() {
        let tree = write_temp(
            r#"{"id":"root","label":"Physics","children":[{"id":"c1","label":"Mechanics"}]}"#,
        );
        let args = LayoutArgs {
            tree: tree.path().to_path_buf(),
            center_x: 400.0,
            center_y: 300.0,
            three_d: false,
        };

        let output = run_layout(&args).unwrap();
        let positions: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(positions[0]["x"], 400.0);
        assert_eq!(positions[0]["y"], 300.0);
        assert_eq!(positions[1]["level"], 1);
    }

    #[test]
    fn test_layout_three_d_output() {
        let tree = write_temp(r#"{"id":"root","label":"Physics"}"#);
        let args = LayoutArgs {
            tree: tree.path().to_path_buf(),
            center_x: 0.0,
            center_y: 0.0,
            three_d: true,
        };

        let output = run_layout(&args).unwrap();
        let positions: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(positions[0]["position"], serde_json::json!([0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_cli_parses_fit_command() {
        let cli = Cli::try_parse_from([
            "pathwise", "fit", "--skills", "s.json", "--roles", "r.json", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Fit(args) => {
                assert!(args.json);
                assert_eq!(args.skills, PathBuf::from("s.json"));
            }
            Command::Layout(_) => panic!("expected fit command"),
        }
    }

    #[test]
    fn test_cli_layout_defaults() {
        let cli = Cli::try_parse_from(["pathwise", "layout", "--tree", "t.json"]).unwrap();
        match cli.command {
            Command::Layout(args) => {
                assert_eq!(args.center_x, 400.0);
                assert_eq!(args.center_y, 300.0);
                assert!(!args.three_d);
            }
            Command::Fit(_) => panic!("expected layout command"),
        }
    }
}
