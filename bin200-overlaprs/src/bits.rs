use num_traits::{identities::zero, PrimInt, Unsigned};

use super::Overlapper;
use bin200_core::models::Interval;

/// A Binary Interval Search index over peak spans.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// Intervals are kept sorted by start. A query binary-searches for the first
/// interval that could reach the query (its start minus the longest interval
/// length) and scans forward until starts pass the query end.
///
/// ```
/// use bin200_overlaprs::{Bits, Overlapper, Interval};
///
/// let peaks = vec![
///     Interval { start: 0u32, end: 50, val: 0usize },
///     Interval { start: 100, end: 150, val: 1 },
///     Interval { start: 300, end: 450, val: 2 },
/// ];
///
/// let bits = Bits::build(peaks);
/// let hits: Vec<usize> = bits.find_iter(0, 200).map(|i| i.val).collect();
/// assert_eq!(hits, vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// List of intervals, sorted by start then end
    pub intervals: Vec<Interval<I, T>>,
    /// The length of the longest interval
    max_len: I,
}

impl<I, T> Overlapper<I, T> for Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Build the index. The intervals are sorted immediately; intervals with
    /// identical spans keep their input order.
    fn build(mut intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        intervals.sort();
        let max_len = intervals
            .iter()
            .map(|interval| interval.width())
            .max()
            .unwrap_or_else(zero::<I>);

        Bits { intervals, max_len }
    }

    /// Find all intervals that overlap start .. stop
    #[inline]
    fn find(&self, start: I, stop: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, stop).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        stop: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        let finder = IterFind {
            inner: self,
            off: Self::lower_bound(self.reach_back(start), &self.intervals),
            start,
            stop,
        };
        Box::new(finder)
    }
}

impl<I, T> Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Get the number of intervals in Bits
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Earliest start an interval may have and still reach `start`.
    #[inline]
    fn reach_back(&self, start: I) -> I {
        start.checked_sub(&self.max_len).unwrap_or_else(zero::<I>)
    }

    /// First index whose start is not below `start`.
    /// Assumes that the maximum interval length has been subtracted from
    /// `start`, otherwise overlapping intervals may be skipped.
    #[inline]
    pub fn lower_bound(start: I, intervals: &[Interval<I, T>]) -> usize {
        let mut size = intervals.len();
        let mut low = 0;

        while size > 0 {
            let half = size / 2;
            let other_half = size - half;
            let probe = low + half;
            let other_low = low + other_half;
            let v = &intervals[probe];
            size = half;
            low = if v.start < start { other_low } else { low }
        }
        low
    }

    /// Find all intervals that overlap start .. stop, for a run of queries
    /// sharing one cursor. The cursor remembers where the previous query
    /// began so the scan moves forward instead of binary searching again.
    ///
    /// Queries must come in non-decreasing `start` order and the cursor must
    /// start at 0. For queries in arbitrary order use
    /// [`Overlapper::find_iter`].
    ///
    /// ```
    /// use bin200_overlaprs::{Bits, Overlapper, Interval};
    ///
    /// let bits = Bits::build((0u32..1000).step_by(150)
    ///     .map(|x| Interval { start: x, end: x + 100, val: x })
    ///     .collect::<Vec<_>>());
    ///
    /// let mut cursor = 0;
    /// let per_window: Vec<usize> = (0u32..1000).step_by(200)
    ///     .map(|s| bits.seek(s, s + 200, &mut cursor).count())
    ///     .collect();
    /// assert_eq!(per_window, vec![2, 2, 1, 2, 2]);
    /// ```
    #[inline]
    pub fn seek<'a>(&'a self, start: I, stop: I, cursor: &mut usize) -> IterFind<'a, I, T> {
        let reach = self.reach_back(start);

        if *cursor == 0 || (*cursor < self.intervals.len() && self.intervals[*cursor].start > start)
        {
            *cursor = Self::lower_bound(reach, &self.intervals);
        }

        while *cursor + 1 < self.intervals.len() && self.intervals[*cursor + 1].start < reach {
            *cursor += 1;
        }

        IterFind {
            inner: self,
            off: *cursor,
            start,
            stop,
        }
    }
}

/// Iterator over the intervals of a [`Bits`] that overlap a query range,
/// created by [`Overlapper::find_iter`] or [`Bits::seek`].
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    inner: &'a Bits<I, T>,
    off: usize,
    start: I,
    stop: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a Interval<I, T>;

    #[inline]
    // interval.start < stop && interval.end > start
    fn next(&mut self) -> Option<Self::Item> {
        while self.off < self.inner.intervals.len() {
            let interval = &self.inner.intervals[self.off];
            self.off += 1;
            if interval.overlap(self.start, self.stop) {
                return Some(interval);
            } else if interval.start >= self.stop {
                break;
            }
        }
        None
    }
}
