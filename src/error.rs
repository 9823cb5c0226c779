use thiserror::Error;

/// All errors produced by the complaint counter.
///
/// The taxonomy maps directly onto process exit codes: date-range problems
/// are caught before any file I/O and exit with 2, everything touching the
/// input file exits with 1. Per-row timestamp parse failures are not errors
/// at all and never appear here.
#[derive(Error, Debug)]
pub enum AppError {
    /// A start/end argument matched neither accepted date format.
    #[error("Invalid date format. Use YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidDate(String),

    /// The parsed end bound precedes the parsed start bound.
    #[error("End date must be on or after start date")]
    EndBeforeStart,

    /// The input path did not resolve to a readable file. Carries the path
    /// as the user typed it, not the resolved absolute form.
    #[error("File not found: {0}")]
    NotFound(String),

    /// A required column is absent from the input header.
    #[error("Missing required column: \"{0}\"")]
    MissingColumn(&'static str),

    /// The input was not well-formed CSV beyond what the flexible reader
    /// tolerates.
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Pass-through for raw I/O errors (e.g. writing the output file).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidDate(_) | AppError::EndBeforeStart => 2,
            AppError::NotFound(_)
            | AppError::MissingColumn(_)
            | AppError::Csv(_)
            | AppError::Io(_) => 1,
        }
    }
}
