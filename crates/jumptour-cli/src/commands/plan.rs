//! Plan command handler for ordering every loaded system into a tour.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::{info, warn};

use jumptour_lib::{
    load_config, load_systems, plan_route, save_config, write_route_csv, JumpRange,
    PlannerConfig, RouteAlgorithm, RouteRequest, RouteSummary,
};

use crate::output::{render_summary, OutputFormat};
use crate::prompt::prompt_config;

/// Arguments for the plan command. Every flag overrides the persisted
/// setting of the same name.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// CSV file of `name,x,y,z` rows.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Maximum jump range in light-years.
    #[arg(long)]
    pub max_jump: Option<f64>,
    /// Return to the first system at the end of the route.
    #[arg(long, value_name = "BOOL", value_parser = parse_flag)]
    pub loop_back: Option<bool>,
    /// End the route at the last system in the file (open routes only).
    #[arg(long, value_name = "BOOL", value_parser = parse_flag)]
    pub final_is_last: Option<bool>,
    /// Planning strategy.
    #[arg(long, default_value_t = RouteAlgorithm::TwoOpt)]
    pub algorithm: RouteAlgorithm,
    /// Stop 2-opt refinement after this many improving moves.
    #[arg(long)]
    pub max_passes: Option<usize>,
    /// Also write the route to this CSV file.
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
    /// Ask for each setting before planning.
    #[arg(long)]
    pub interactive: bool,
    /// Do not save the resolved settings back to the config file.
    #[arg(long)]
    pub no_save: bool,
}

impl PlanArgs {
    /// Overlay explicit flags on top of the persisted settings.
    pub fn apply(&self, config: &mut PlannerConfig) {
        if let Some(file) = &self.file {
            config.filename = file.clone();
        }
        if let Some(max_jump) = self.max_jump {
            config.max_jump_range = max_jump;
        }
        if let Some(loop_back) = self.loop_back {
            config.loop_back = loop_back;
        }
        if let Some(final_is_last) = self.final_is_last {
            config.final_is_last = final_is_last;
        }
    }

    /// Build the planning request for the resolved settings.
    pub fn to_request(&self, config: &PlannerConfig) -> RouteRequest {
        RouteRequest {
            algorithm: self.algorithm,
            max_passes: self.max_passes,
            ..config.to_request()
        }
    }
}

/// Parse `true/false` or `yes/no` (any case).
pub fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(format!("expected true/false or yes/no, found '{other}'")),
    }
}

/// Handle the plan subcommand.
///
/// Resolves settings (config file, flags, then prompts), loads the systems
/// file, plans the route and prints it.
pub fn handle_plan_command(config_path: &Path, format: OutputFormat, args: &PlanArgs) -> Result<()> {
    let mut config = load_config(config_path);
    args.apply(&mut config);

    if args.interactive {
        // Prompts go to stderr so stdout only carries the rendered route.
        let stdin = io::stdin();
        let mut stderr = io::stderr();
        config = prompt_config(&mut stdin.lock(), &mut stderr, &config)?;
    }

    JumpRange::new(config.max_jump_range).context("invalid maximum jump range")?;

    if !args.no_save {
        if let Err(err) = save_config(config_path, &config) {
            warn!(path = %config_path.display(), error = %err, "failed to save config");
        }
    }

    let systems = load_systems(&config.filename)
        .with_context(|| format!("failed to load systems from {}", config.filename.display()))?;
    if systems.is_empty() {
        bail!("no systems loaded from {}", config.filename.display());
    }
    info!(count = systems.len(), "loaded systems");

    let request = args.to_request(&config);
    let plan = plan_route(&systems, &request).context("failed to plan route")?;
    let summary = RouteSummary::from_plan(&systems, &plan).context("failed to summarise route")?;

    render_summary(&summary, format).context("failed to write route")?;

    if let Some(csv_path) = &args.output_csv {
        let file = File::create(csv_path)
            .with_context(|| format!("failed to create {}", csv_path.display()))?;
        write_route_csv(&summary, file)
            .with_context(|| format!("failed to write route CSV to {}", csv_path.display()))?;
        if format.is_decorated() {
            println!("Route written to {}", csv_path.display());
        }
    }

    Ok(())
}
