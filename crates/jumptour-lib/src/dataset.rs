//! Loading systems from delimited coordinate files.
//!
//! Files are plain `name,x,y,z` rows. There is no header handling as such: a
//! header row simply fails to parse and is skipped along with every other
//! malformed row. Columns past the fourth are ignored.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::system::System;

/// Load every well-formed system from the CSV file at `path`.
///
/// The position of each system in the returned vector is its
/// [`SystemId`](crate::SystemId) for planning.
pub fn load_systems(path: &Path) -> Result<Vec<System>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let systems = load_systems_from_reader(file)?;
    debug!(path = %path.display(), count = systems.len(), "loaded systems");
    Ok(systems)
}

/// Load systems from any reader producing CSV text.
pub fn load_systems_from_reader<R: Read>(reader: R) -> Result<Vec<System>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut systems = Vec::new();
    let mut skipped = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                debug!(row, error = %err, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        match parse_record(&record) {
            Some(system) => systems.push(system),
            None => {
                debug!(row, "skipping malformed row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, loaded = systems.len(), "ignored malformed rows");
    }

    Ok(systems)
}

fn parse_record(record: &StringRecord) -> Option<System> {
    if record.len() < 4 {
        return None;
    }
    let name = record.get(0)?.trim_matches('"').to_string();
    let coordinate = |i: usize| record.get(i)?.parse::<f64>().ok();
    let system = System::new(name, coordinate(1)?, coordinate(2)?, coordinate(3)?);
    system.has_finite_position().then_some(system)
}
