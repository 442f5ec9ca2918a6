// Test-only helpers for `jumptour-lib` unit tests
#![allow(dead_code)]
use crate::cost::JumpRange;
use crate::system::System;

pub fn range(value: f64) -> JumpRange {
    JumpRange::new(value).expect("valid test range")
}

/// Systems laid out along the x axis, named `S0`, `S1`, ...
pub fn line_systems(xs: &[f64]) -> Vec<System> {
    xs.iter()
        .enumerate()
        .map(|(i, &x)| System::new(format!("S{i}"), x, 0.0, 0.0))
        .collect()
}

/// Deterministic pseudo-random cloud of systems inside a cube of side `extent`.
pub fn scattered_systems(count: usize, seed: u64, extent: f64) -> Vec<System> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * extent
    };
    (0..count)
        .map(|i| {
            let (x, y, z) = (next(), next(), next());
            System::new(format!("R{i}"), x, y, z)
        })
        .collect()
}
