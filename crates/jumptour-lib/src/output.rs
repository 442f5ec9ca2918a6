use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::{RouteAlgorithm, RoutePlan};
use crate::system::{System, SystemId};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Bordered table with per-step jumps and running distance.
    PlainText,
    /// One system name per line.
    Basic,
}

/// Where a step sits within the route.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepRole {
    Start,
    Waypoint,
    End,
    /// Return to the start that closes a loop.
    Loop,
}

impl StepRole {
    /// Marker shown in the text table.
    pub fn marker(self) -> &'static str {
        match self {
            StepRole::Start => "START",
            StepRole::Waypoint => "",
            StepRole::End => "END",
            StepRole::Loop => "LOOP",
        }
    }
}

/// Step taken during traversal of a planned route.
///
/// `jumps` and `distance` describe the leg arriving at this step, so the
/// first step always reports zero. `index` is zero-based; the text table and
/// the result CSV show [`RouteStep::number`] instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: SystemId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub jumps: usize,
    pub distance: f64,
    pub total_jumps: usize,
    pub total_distance: f64,
    pub role: StepRole,
}

impl RouteStep {
    /// One-based position shown to people.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub max_jump: f64,
    pub closed: bool,
    pub systems_visited: usize,
    pub total_jumps: usize,
    pub total_distance: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved system names.
    pub fn from_plan(systems: &[System], plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let last = plan.steps.len() - 1;
        let mut total_jumps = 0usize;
        let mut total_distance = 0.0;
        let mut steps = Vec::with_capacity(plan.steps.len());

        for (index, &id) in plan.steps.iter().enumerate() {
            let system = systems.get(id).ok_or(Error::UnknownSystemId { id })?;
            let (jumps, distance) = match index.checked_sub(1) {
                Some(leg) => plan
                    .cost
                    .legs
                    .get(leg)
                    .map(|leg| (leg.jumps, leg.distance))
                    .unwrap_or_default(),
                None => (0, 0.0),
            };
            total_jumps = total_jumps.saturating_add(jumps);
            total_distance += distance;

            let role = if index == 0 {
                StepRole::Start
            } else if index == last && plan.closed {
                StepRole::Loop
            } else if index == last {
                StepRole::End
            } else {
                StepRole::Waypoint
            };

            steps.push(RouteStep {
                index,
                id,
                name: system.name.clone(),
                x: system.position.x,
                y: system.position.y,
                z: system.position.z,
                jumps,
                distance,
                total_jumps,
                total_distance,
                role,
            });
        }

        Ok(Self {
            algorithm: plan.algorithm,
            max_jump: plan.max_jump.get(),
            closed: plan.closed,
            systems_visited: plan.systems_visited(),
            total_jumps: plan.total_jumps(),
            total_distance: plan.total_distance(),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let name_width = self
            .steps
            .iter()
            .map(|step| step.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("System".len());
        let widths = [4, name_width, 5, 10, 6];
        let border = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");

        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route through {} systems (range {}ly, algorithm: {}):",
            self.systems_visited, self.max_jump, self.algorithm
        );
        let _ = writeln!(buffer, "+{border}+");
        let _ = writeln!(
            buffer,
            "| {:>4} | {:<name_width$} | {:>5} | {:>10} | {:<6} |",
            "Step", "System", "Jumps", "Total LY", "Marker"
        );
        let _ = writeln!(buffer, "+{border}+");
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "| {:>4} | {:<name_width$} | {:>5} | {:>10.2} | {:<6} |",
                step.number(),
                step.name,
                step.jumps,
                step.total_distance,
                step.role.marker()
            );
        }
        let _ = writeln!(buffer, "+{border}+");
        let _ = writeln!(buffer, "Systems visited: {}", self.systems_visited);
        let _ = writeln!(buffer, "Total jumps: {}", self.total_jumps);
        let _ = writeln!(buffer, "Total distance: {:.2}ly", self.total_distance);
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let len = self.steps.len();
        for (i, step) in self.steps.iter().enumerate() {
            let prefix = if i == 0 {
                '+'
            } else if i + 1 == len {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{} {}", prefix, step.name);
        }
        let _ = writeln!(
            buffer,
            "via {} jumps / {:.2}ly",
            self.total_jumps, self.total_distance
        );
        buffer
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Step")]
    step: usize,
    #[serde(rename = "System")]
    system: &'a str,
    #[serde(rename = "Jumps")]
    jumps: usize,
    #[serde(rename = "Leg_LY")]
    leg_ly: f64,
    #[serde(rename = "Total_Jumps")]
    total_jumps: usize,
    #[serde(rename = "Total_LY")]
    total_ly: f64,
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "Z")]
    z: f64,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Write one CSV row per step, preceded by a header row.
pub fn write_route_csv<W: io::Write>(summary: &RouteSummary, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for step in &summary.steps {
        csv_writer.serialize(CsvRow {
            step: step.number(),
            system: &step.name,
            jumps: step.jumps,
            leg_ly: round3(step.distance),
            total_jumps: step.total_jumps,
            total_ly: round3(step.total_distance),
            x: step.x,
            y: step.y,
            z: step.z,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
