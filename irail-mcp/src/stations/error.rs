//! Station dataset error types.

/// Errors that can occur while loading the station dataset.
///
/// Any of these means the search feature as a whole is unavailable: there
/// is no fallback to an empty dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// The dataset file could not be read
    #[error("failed to read station dataset {path}: {message}")]
    Read { path: String, message: String },

    /// The dataset is not a valid JSON array of station records
    #[error("invalid station dataset: {message}")]
    Parse { message: String },
}
