use bin200_core::models::{PeakSet, Window, WindowSet};

use crate::bits::Bits;
use crate::errors::OverlapError;
use crate::traits::{Interval, Overlapper};

///
/// One row of the window/peak join: a window and the binary value of one
/// peak overlapping it, or `None` when no peak overlaps the window.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapRecord<'a> {
    pub window: &'a Window,
    pub value: Option<u8>,
}

///
/// Joins the windows of a chromosome against the peaks file.
///
/// The peak index stores peak ordinals, so it is built once and reused for
/// every sample: [OverlapMapper::intersect] only swaps in that sample's
/// value column.
///
pub struct OverlapMapper<'a> {
    windows: &'a WindowSet,
    index: Bits<u32, usize>,
    n_peaks: usize,
}

impl<'a> OverlapMapper<'a> {
    ///
    /// Index the peaks that lie on the windows' chromosome.
    ///
    /// Rows on any other chromosome keep their ordinal, so value `i` of a
    /// sample still belongs to peak row `i`, but they never reach a window.
    ///
    pub fn new(windows: &'a WindowSet, peaks: &PeakSet) -> Self {
        let intervals: Vec<Interval<u32, usize>> = peaks
            .iter()
            .enumerate()
            .filter(|(_, peak)| peak.chr == windows.chrom())
            .map(|(ordinal, peak)| {
                let (start, end) = peak.span();
                Interval {
                    start,
                    end,
                    val: ordinal,
                }
            })
            .collect();

        OverlapMapper {
            windows,
            index: Bits::build(intervals),
            n_peaks: peaks.len(),
        }
    }

    pub fn windows(&self) -> &'a WindowSet {
        self.windows
    }

    pub fn n_peaks(&self) -> usize {
        self.n_peaks
    }

    ///
    /// Left outer join of every window against the peaks, with `values[i]`
    /// attached to peak `i`.
    ///
    /// Records come out in window order; within one window, in peak start
    /// order. Every window yields at least one record.
    ///
    /// # Arguments:
    /// - values: one binary value per peak, in peaks file order
    pub fn intersect(&self, values: &[u8]) -> Result<Vec<OverlapRecord<'a>>, OverlapError> {
        if values.len() != self.n_peaks {
            return Err(OverlapError::ValueCountMismatch {
                values: values.len(),
                peaks: self.n_peaks,
            });
        }

        let windows: &'a WindowSet = self.windows;
        let mut records: Vec<OverlapRecord<'a>> = Vec::with_capacity(windows.len());
        let mut cursor = 0;

        for window in windows.iter() {
            let (start, end) = window.span();
            let before = records.len();

            for peak in self.index.seek(start, end, &mut cursor) {
                records.push(OverlapRecord {
                    window,
                    value: Some(values[peak.val]),
                });
            }

            if records.len() == before {
                records.push(OverlapRecord {
                    window,
                    value: None,
                });
            }
        }

        Ok(records)
    }
}
