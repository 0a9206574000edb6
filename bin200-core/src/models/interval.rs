use num_traits::{identities::zero, PrimInt, Unsigned};
use std::cmp::Ordering::{self};

/// A half-open span `[start, end)` carrying a payload.
///
/// Ordering and equality only look at the coordinates, so sorting a
/// `Vec<Interval>` orders by start, then end, and leaves payloads of
/// identical spans in their original order.
#[derive(Eq, Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> Ord for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I, T>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<I, T> Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Number of bases shared with another interval.
    #[inline]
    pub fn intersect(&self, other: &Interval<I, T>) -> I {
        std::cmp::min(self.end, other.end)
            .checked_sub(&std::cmp::max(self.start, other.start))
            .unwrap_or_else(zero::<I>)
    }

    /// Whether this interval shares at least one base with `[start, end)`.
    #[inline]
    pub fn overlap(&self, start: I, end: I) -> bool {
        self.start < end && self.end > start
    }

    #[inline]
    pub fn width(&self) -> I {
        self.end.checked_sub(&self.start).unwrap_or_else(zero::<I>)
    }
}

impl<I, T> PartialOrd for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, T> PartialEq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn iv(start: u32, end: u32) -> Interval<u32, usize> {
        Interval { start, end, val: 0 }
    }

    #[rstest]
    #[case(iv(0, 50), 49, 60, true)]
    #[case(iv(0, 50), 50, 60, false)]
    #[case(iv(100, 150), 0, 100, false)]
    #[case(iv(100, 150), 0, 101, true)]
    fn test_overlap(
        #[case] interval: Interval<u32, usize>,
        #[case] start: u32,
        #[case] end: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(interval.overlap(start, end), expected);
    }

    #[rstest]
    fn test_intersect_and_width() {
        assert_eq!(iv(0, 50).intersect(&iv(25, 100)), 25);
        assert_eq!(iv(0, 50).intersect(&iv(60, 100)), 0);
        assert_eq!(iv(25, 100).width(), 75);
    }

    #[rstest]
    fn test_sort_keeps_payload_order_for_equal_spans() {
        let mut intervals = vec![
            Interval { start: 10u32, end: 20, val: 2 },
            Interval { start: 0, end: 5, val: 0 },
            Interval { start: 10, end: 20, val: 1 },
        ];
        intervals.sort();
        let vals: Vec<usize> = intervals.iter().map(|i| i.val).collect();
        assert_eq!(vals, vec![0, 2, 1]);
    }
}
