//! Output formatting for route rendering.
//!
//! The library renders summaries to strings; this module picks the format,
//! adds the banner and footer, and writes everything to stdout.

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use jumptour_lib::{RouteRenderMode, RouteSummary};

use crate::terminal::{supports_unicode, ColorPalette};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table with per-step jumps and totals.
    #[default]
    Text,
    /// One system per line.
    Basic,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Whether decorations such as the banner and footer belong in the output.
    pub fn is_decorated(self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when the locale advertises UTF-8 and falls
/// back to ASCII otherwise.
pub fn print_logo() {
    let p = ColorPalette::detect();

    if supports_unicode() {
        println!(
            "{cyan}╭────────────────────────────────────────╮{reset}
{cyan}│{orange}   J U M P T O U R   ·   route planner  {cyan}│{reset}
{cyan}╰────────────────────────────────────────╯{reset}",
            cyan = p.cyan,
            orange = p.orange,
            reset = p.reset
        );
    } else {
        println!(
            "{color}+----------------------------------------+
|  JUMPTOUR  >> ROUTE PLANNER            |
+----------------------------------------+{reset}",
            color = p.orange,
            reset = p.reset
        );
    }
}

/// Format an elapsed duration as milliseconds below one second, seconds otherwise.
pub fn format_elapsed(elapsed: Duration) -> String {
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration) {
    let p = ColorPalette::detect();
    println!("\n{}Completed in {}{}", p.gray, format_elapsed(elapsed), p.reset);
}

/// Render a route summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", summary.render(RouteRenderMode::PlainText));
            Ok(())
        }
        OutputFormat::Basic => {
            print!("{}", summary.render(RouteRenderMode::Basic));
            Ok(())
        }
        OutputFormat::Json => print_json(summary),
    }
}

/// Write any serialisable value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
