#![allow(dead_code)]

use std::path::PathBuf;

use jumptour_lib::{load_systems, System};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_systems() -> Vec<System> {
    load_systems(&fixtures_dir().join("sys_coor.csv")).expect("load fixture sys_coor.csv")
}

/// Three systems on a line, 10ly apart.
pub fn abc() -> Vec<System> {
    vec![
        System::new("A", 0.0, 0.0, 0.0),
        System::new("B", 10.0, 0.0, 0.0),
        System::new("C", 20.0, 0.0, 0.0),
    ]
}

/// Deterministic cloud of systems for property-style checks.
pub fn cloud(count: usize, seed: u64) -> Vec<System> {
    let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 120.0
    };
    (0..count)
        .map(|i| System::new(format!("P{i}"), next(), next(), next()))
        .collect()
}
