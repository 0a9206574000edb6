use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OverlapError {
    #[error("Binary value count mismatch: {values} vs {peaks}")]
    ValueCountMismatch { values: usize, peaks: usize },
}
