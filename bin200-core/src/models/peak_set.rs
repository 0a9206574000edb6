use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::PeakSetError;
use crate::models::Peak;
use crate::utils::get_dynamic_reader;

///
/// PeakSet struct, the validated contents of a peaks file.
///
/// Peaks are kept in file order: row `N` of the peaks file is paired with
/// value line `N` of every sample file. Fields are private so a PeakSet
/// only exists through the validating constructors, which never yield an
/// empty set.
///
#[derive(Clone, Debug)]
pub struct PeakSet {
    peaks: Vec<Peak>,
    header: Option<String>,
    path: Option<PathBuf>,
}

impl PeakSet {
    /// The chromosome shared by the peaks, taken from the first row.
    pub fn chrom(&self) -> &str {
        self.peaks.first().map(|p| p.chr.as_str()).unwrap_or_default()
    }

    /// Header line of the peaks file, if loaded from one.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Largest end coordinate over all peaks.
    pub fn max_end(&self) -> u32 {
        self.peaks.iter().map(|p| p.end).max().unwrap_or(0)
    }

    ///
    /// Chromosome names, in first-seen order, that differ from [PeakSet::chrom].
    ///
    /// Loading does not reject mixed-chromosome files; this lets callers
    /// report them.
    ///
    pub fn other_chroms(&self) -> Vec<&str> {
        let chrom = self.chrom();
        let mut others: Vec<&str> = Vec::new();
        for peak in self.peaks.iter() {
            if peak.chr != chrom && !others.contains(&peak.chr.as_str()) {
                others.push(&peak.chr);
            }
        }
        others
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Peak> {
        self.peaks.iter()
    }

    /// Reject a row whose start lies past its end.
    fn check_peak(peak: &Peak, line: usize) -> Result<(), PeakSetError> {
        if peak.start > peak.end {
            return Err(PeakSetError::InvalidPeak {
                line,
                start: peak.start,
                end: peak.end,
            });
        }
        Ok(())
    }
}

impl TryFrom<&Path> for PeakSet {
    type Error = PeakSetError;

    ///
    /// Read a peaks file: one header line, then `chr\tstart\tend` rows.
    ///
    /// # Arguments:
    /// - value: path to the peaks file, optionally gzipped
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| PeakSetError::FileReadError(format!("{:#}", e)))?;

        let mut header: Option<String> = None;
        let mut peaks: Vec<Peak> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            if index == 0 {
                header = Some(line);
                continue;
            }

            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let peak = Peak::from_str(line).map_err(|reason| PeakSetError::PeakParseError {
                line: line_number,
                reason,
            })?;

            PeakSet::check_peak(&peak, line_number)?;
            peaks.push(peak);
        }

        if peaks.is_empty() {
            return Err(PeakSetError::EmptyPeakSet(value.display().to_string()));
        }

        Ok(PeakSet {
            peaks,
            header,
            path: Some(value.to_owned()),
        })
    }
}

impl TryFrom<&str> for PeakSet {
    type Error = PeakSetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PeakSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for PeakSet {
    type Error = PeakSetError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        PeakSet::try_from(value.as_path())
    }
}

impl TryFrom<Vec<Peak>> for PeakSet {
    type Error = PeakSetError;

    /// Build a PeakSet from in-memory peaks, applying the same checks as file loading.
    fn try_from(value: Vec<Peak>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(PeakSetError::EmptyPeakSet("<in-memory peaks>".to_string()));
        }
        for (index, peak) in value.iter().enumerate() {
            PeakSet::check_peak(peak, index + 1)?;
        }

        Ok(PeakSet {
            peaks: value,
            header: None,
            path: None,
        })
    }
}

impl<'a> IntoIterator for &'a PeakSet {
    type Item = &'a Peak;
    type IntoIter = std::slice::Iter<'a, Peak>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}
