use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use jumptour_cli::commands::config::handle_config_command;
use jumptour_cli::commands::plan::{handle_plan_command, PlanArgs};
use jumptour_cli::output::{print_footer, print_logo, OutputFormat};
use jumptour_lib::resolve_config_path;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan jump-range limited tours through star systems")]
struct Cli {
    /// Override the config file location (defaults to $JUMPTOUR_CONFIG or the
    /// platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route through every system in a CSV file.
    Plan(PlanArgs),
    /// Show the config file location and its current values.
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    if cli.format.is_decorated() && !cli.no_logo {
        print_logo();
    }

    let config_path = resolve_config_path(cli.config.as_deref())
        .context("failed to resolve the config file location")?;

    match &cli.command {
        Command::Plan(args) => handle_plan_command(&config_path, cli.format, args)?,
        Command::Config => handle_config_command(&config_path, cli.format)?,
    }

    if cli.format.is_decorated() {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
