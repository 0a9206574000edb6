use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bin200_core::SAMPLE_HEADER_LINES;

use crate::errors::SampleError;

///
/// A per-peak sample file: two opaque header lines followed by one binary
/// value per peak, in peaks file order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBinaryFile {
    /// Raw header lines, byte for byte, including their line terminators.
    pub header: Vec<Vec<u8>>,
    pub values: Vec<u8>,
}

impl SampleBinaryFile {
    ///
    /// Read a sample file from disk. The handle is closed before returning,
    /// whether or not parsing succeeds.
    ///
    /// # Arguments:
    /// - path: path to a `*_chr{chrom}_binary.txt` file
    pub fn from_path(path: &Path) -> Result<Self, SampleError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a sample file from any buffered reader.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, SampleError> {
        let mut header: Vec<Vec<u8>> = Vec::with_capacity(SAMPLE_HEADER_LINES);
        for _ in 0..SAMPLE_HEADER_LINES {
            let mut line: Vec<u8> = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Err(SampleError::MissingHeader {
                    found: header.len(),
                });
            }
            header.push(line);
        }

        let mut values: Vec<u8> = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let value = match line.trim() {
                "0" => 0,
                "1" => 1,
                other => {
                    return Err(SampleError::InvalidValue {
                        line: SAMPLE_HEADER_LINES + index + 1,
                        value: other.to_string(),
                    });
                }
            };
            values.push(value);
        }

        Ok(SampleBinaryFile { header, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
