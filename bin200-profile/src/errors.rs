use std::path::PathBuf;

use thiserror::Error;

use bin200_core::PeakSetError;
use bin200_overlaprs::OverlapError;

/// Problems with a single sample file. These never stop a run: the file is
/// skipped and the next one is processed.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("expected 2 header lines, found {found}")]
    MissingHeader { found: usize },

    #[error("invalid binary value {value:?} at line {line}")]
    InvalidValue { line: usize, value: String },

    #[error("binary count mismatch: {values} vs {peaks}")]
    CountMismatch { values: usize, peaks: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<OverlapError> for SampleError {
    fn from(err: OverlapError) -> Self {
        match err {
            OverlapError::ValueCountMismatch { values, peaks } => {
                SampleError::CountMismatch { values, peaks }
            }
        }
    }
}

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error(transparent)]
    Peaks(#[from] PeakSetError),

    #[error("Can't read input directory {path:?}")]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("There was an error creating the output directory: {path:?}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write profile: {path:?}")]
    WriteProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sample file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Error reading sample file entry: {0}")]
    GlobEntry(#[from] glob::GlobError),

    #[error("Invalid progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}
