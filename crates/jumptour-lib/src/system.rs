use std::fmt;

use serde::Serialize;

/// Identifier for a system within a planning run.
///
/// Identity is positional: a system's id is its index in the slice handed to
/// the planner. Two systems sharing coordinates remain distinct entities.
pub type SystemId = usize;

/// Cartesian coordinates for a system, in light-years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SystemPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A named point in space that a route can visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System {
    pub name: String,
    pub position: SystemPosition,
}

impl System {
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            position: SystemPosition::new(x, y, z),
        }
    }

    /// Whether every coordinate is a finite number.
    pub fn has_finite_position(&self) -> bool {
        self.position.is_finite()
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}, {:.2}, {:.2})",
            self.name, self.position.x, self.position.y, self.position.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_uses_all_three_axes() {
        let a = SystemPosition::new(0.0, 0.0, 0.0);
        let b = SystemPosition::new(1.0, 2.0, 2.0);
        assert_eq!(a.distance_to(&b), 3.0);
    }

    #[test]
    fn display_includes_name_and_coordinates() {
        let system = System::new("Nod", 1.0, -2.5, 3.25);
        assert_eq!(system.to_string(), "Nod (1.00, -2.50, 3.25)");
    }

    #[test]
    fn non_finite_coordinates_are_detected() {
        assert!(System::new("ok", 1.0, 2.0, 3.0).has_finite_position());
        assert!(!System::new("bad", f64::NAN, 2.0, 3.0).has_finite_position());
        assert!(!System::new("bad", 1.0, f64::INFINITY, 3.0).has_finite_position());
    }
}
