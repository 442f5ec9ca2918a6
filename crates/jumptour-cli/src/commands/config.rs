//! Config command handler for showing the persisted planner settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use jumptour_lib::{load_config, PlannerConfig};

use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
struct ConfigReport {
    path: PathBuf,
    exists: bool,
    config: PlannerConfig,
}

/// Handle the config subcommand.
pub fn handle_config_command(config_path: &Path, format: OutputFormat) -> Result<()> {
    let report = ConfigReport {
        path: config_path.to_path_buf(),
        exists: config_path.exists(),
        config: load_config(config_path),
    };

    if format == OutputFormat::Json {
        return print_json(&report).context("failed to write config");
    }

    let note = if report.exists { "" } else { " (not yet created)" };
    println!("Config file: {}{}", report.path.display(), note);
    let json = serde_json::to_string_pretty(&report.config).context("failed to encode config")?;
    println!("{json}");
    Ok(())
}
