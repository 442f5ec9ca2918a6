mod common;

use jumptour_lib::{load_systems, Error};

#[test]
fn fixture_loads_well_formed_rows_in_order() {
    let systems = common::fixture_systems();
    let names: Vec<&str> = systems.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Nod", "Brana", "Tolla", "Halvar", "Ossen", "Vexa", "Quill", "Marrow"]
    );
    assert_eq!(systems[6].position.z, -30.0);
}

#[test]
fn missing_dataset_reports_path() {
    let path = common::fixtures_dir().join("does_not_exist.csv");
    match load_systems(&path) {
        Err(Error::DatasetNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
}
