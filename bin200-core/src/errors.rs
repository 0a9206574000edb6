use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeakSetError {
    #[error("Can't read peaks file: {0}")]
    FileReadError(String),

    #[error("Error parsing peak at line {line}: {reason}")]
    PeakParseError { line: usize, reason: String },

    #[error("Invalid peak at line {line} with start > end ({start} > {end})")]
    InvalidPeak { line: usize, start: u32, end: u32 },

    #[error("Empty peaks file. 0 peaks found in: {0}")]
    EmptyPeakSet(String),

    #[error("Window width must be greater than zero")]
    InvalidWindowWidth,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
