use bin200_core::models::{PeakSet, WindowSet};
use bin200_overlaprs::{OverlapMapper, OverlapRecord};

use crate::errors::SampleError;
use crate::profile::OutputProfile;
use crate::sample::SampleBinaryFile;

///
/// Fold overlap records into one value per window.
///
/// Each window starts at 0 and keeps the max of every peak value joined to
/// it, so a window is 1 as soon as any overlapping peak is 1. Sentinel
/// records leave the window untouched.
///
pub fn reduce_overlaps(records: &[OverlapRecord], windows: &WindowSet) -> Vec<u8> {
    records
        .iter()
        .fold(vec![0u8; windows.len()], |mut result, record| {
            if let (Some(value), Some(idx)) = (record.value, windows.index_of(record.window)) {
                result[idx] = result[idx].max(value);
            }
            result
        })
}

///
/// Maps sample files onto the windows of one chromosome.
///
/// Built once per run from the peaks and windows; every sample file is then
/// profiled against the same overlap index.
///
pub struct WindowProfiler<'a> {
    mapper: OverlapMapper<'a>,
}

impl<'a> WindowProfiler<'a> {
    pub fn new(windows: &'a WindowSet, peaks: &PeakSet) -> Self {
        WindowProfiler {
            mapper: OverlapMapper::new(windows, peaks),
        }
    }

    pub fn windows(&self) -> &'a WindowSet {
        self.mapper.windows()
    }

    pub fn n_peaks(&self) -> usize {
        self.mapper.n_peaks()
    }

    ///
    /// Build the window profile of one sample.
    ///
    /// Fails with [SampleError::CountMismatch] when the sample does not
    /// carry exactly one value per peak.
    pub fn profile(&self, sample: SampleBinaryFile) -> Result<OutputProfile, SampleError> {
        let records = self.mapper.intersect(&sample.values)?;
        let values = reduce_overlaps(&records, self.windows());

        Ok(OutputProfile {
            header: sample.header,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bin200_core::models::Peak;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn peak_set(coords: &[(u32, u32)]) -> PeakSet {
        PeakSet::try_from(
            coords
                .iter()
                .map(|&(start, end)| Peak {
                    chr: "1".to_string(),
                    start,
                    end,
                })
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    fn sample(values: &[u8]) -> SampleBinaryFile {
        SampleBinaryFile {
            header: vec![b"h1\n".to_vec(), b"h2\n".to_vec()],
            values: values.to_vec(),
        }
    }

    #[rstest]
    fn test_two_peaks_in_one_window() {
        let peaks = peak_set(&[(0, 50), (100, 150)]);
        let windows = WindowSet::from_peaks(&peaks);
        let profiler = WindowProfiler::new(&windows, &peaks);

        let profile = profiler.profile(sample(&[0, 1])).unwrap();
        assert_eq!(profile.values, vec![1]);
        assert_eq!(profile.header, vec![b"h1\n".to_vec(), b"h2\n".to_vec()]);
    }

    #[rstest]
    #[case(&[0, 0, 0], vec![0, 0, 0, 0])]
    #[case(&[1, 0, 0], vec![1, 1, 0, 0])]
    #[case(&[0, 1, 0], vec![1, 0, 0, 0])]
    #[case(&[0, 0, 1], vec![0, 0, 0, 1])]
    #[case(&[1, 1, 1], vec![1, 1, 0, 1])]
    fn test_max_reduction(#[case] values: &[u8], #[case] expected: Vec<u8>) {
        // peak 0 spans windows 0-1, peak 1 sits in window 0, window 2 is empty
        let peaks = peak_set(&[(150, 250), (10, 20), (610, 700)]);
        let windows = WindowSet::from_peaks(&peaks);
        let profiler = WindowProfiler::new(&windows, &peaks);

        let profile = profiler.profile(sample(values)).unwrap();
        assert_eq!(profile.values, expected);
        assert_eq!(profile.values.len(), windows.len());
    }

    #[rstest]
    fn test_count_mismatch() {
        let peaks = peak_set(&[(0, 50), (100, 150)]);
        let windows = WindowSet::from_peaks(&peaks);
        let profiler = WindowProfiler::new(&windows, &peaks);

        let result = profiler.profile(sample(&[1, 0, 1]));
        match result {
            Err(SampleError::CountMismatch { values, peaks }) => {
                assert_eq!((values, peaks), (3, 2));
            }
            other => panic!("expected CountMismatch, got {:?}", other),
        }
    }

    #[rstest]
    fn test_reduce_overlaps_ignores_sentinels() {
        let windows = WindowSet::tile("1", 450);
        let records: Vec<OverlapRecord> = windows
            .iter()
            .map(|window| OverlapRecord {
                window,
                value: None,
            })
            .collect();
        assert_eq!(reduce_overlaps(&records, &windows), vec![0, 0, 0]);
    }

    #[rstest]
    fn test_reduce_overlaps_keeps_max_regardless_of_order() {
        let windows = WindowSet::tile("1", 450);
        let w1 = windows.get(1).unwrap();
        let records = vec![
            OverlapRecord {
                window: w1,
                value: Some(1),
            },
            OverlapRecord {
                window: w1,
                value: Some(0),
            },
        ];
        assert_eq!(reduce_overlaps(&records, &windows), vec![0, 1, 0]);
    }

    #[rstest]
    fn test_peak_on_other_chromosome_does_not_mark_window() {
        let peaks = PeakSet::try_from(vec![
            Peak {
                chr: "1".to_string(),
                start: 0,
                end: 50,
            },
            Peak {
                chr: "2".to_string(),
                start: 0,
                end: 50,
            },
        ])
        .unwrap();
        let windows = WindowSet::from_peaks(&peaks);
        let profiler = WindowProfiler::new(&windows, &peaks);

        assert_eq!(profiler.profile(sample(&[0, 1])).unwrap().values, vec![0]);
        assert_eq!(profiler.profile(sample(&[1, 0])).unwrap().values, vec![1]);
    }
}
