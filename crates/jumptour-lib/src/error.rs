use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the jump-route planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the maximum jump range is not a positive, finite number.
    #[error("invalid jump range {value}; expected a positive number of light-years")]
    InvalidRange { value: f64 },

    /// Systems file could not be located at the resolved path.
    #[error("systems file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the configuration file")]
    ProjectDirsUnavailable,

    /// Raised when a computed route plan lacks any systems.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a route references a system that is not in the loaded set.
    #[error("route references unknown system id {id}")]
    UnknownSystemId { id: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader and writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
