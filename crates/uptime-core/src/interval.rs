//! Interval algebra over integer timestamps.
//!
//! Intervals are closed: `[start, end]`. Two intervals that share an
//! endpoint are considered contiguous and merge into one.

/// A timestamp as it appears in availability reports.
pub type Timestamp = u64;

/// A closed span of time `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl From<(Timestamp, Timestamp)> for Interval {
    fn from((start, end): (Timestamp, Timestamp)) -> Self {
        Self { start, end }
    }
}

impl Interval {
    /// Creates an interval, returning `None` if `start > end`.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Option<Self> {
        if start > end {
            None
        } else {
            Some(Self { start, end })
        }
    }

    /// Length of the span. Saturates to zero for an inverted interval.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// The smallest interval containing both `self` and `other`.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Merges overlapping or contiguous intervals.
///
/// Sorts `intervals` in place by start, then returns the minimal set of
/// disjoint intervals covering the same points, ascending by start.
/// Consecutive outputs are separated by a strictly positive gap.
pub fn unify(intervals: &mut [Interval]) -> Vec<Interval> {
    intervals.sort_unstable_by_key(|i| i.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals.iter() {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
            } else {
                merged.push(*interval);
            }
        } else {
            merged.push(*interval);
        }
    }
    merged
}

/// Sums the lengths of `intervals` without deduplicating overlaps.
///
/// Pass the output of [`unify`] to measure a union.
pub fn length(intervals: &[Interval]) -> u64 {
    intervals.iter().map(Interval::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivs(pairs: &[(u64, u64)]) -> Vec<Interval> {
        pairs.iter().copied().map(Interval::from).collect()
    }

    fn assert_canonical(merged: &[Interval]) {
        for pair in merged.windows(2) {
            assert!(
                pair[0].end < pair[1].start,
                "expected a positive gap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_unify_empty() {
        assert!(unify(&mut []).is_empty());
    }

    #[test]
    fn test_unify_single() {
        assert_eq!(unify(&mut ivs(&[(5, 9)])), ivs(&[(5, 9)]));
    }

    #[test]
    fn test_unify_adjacent_merge() {
        let merged = unify(&mut ivs(&[(0, 50), (50, 100)]));
        assert_eq!(merged, ivs(&[(0, 100)]));
    }

    #[test]
    fn test_unify_overlapping_merge() {
        let merged = unify(&mut ivs(&[(0, 50), (20, 100), (100, 200)]));
        assert_eq!(merged, ivs(&[(0, 200)]));
    }

    #[test]
    fn test_unify_gap_preserved() {
        let merged = unify(&mut ivs(&[(0, 50), (50, 100), (200, 300)]));
        assert_eq!(merged, ivs(&[(0, 100), (200, 300)]));
        assert_eq!(length(&merged), 200);
    }

    #[test]
    fn test_unify_unsorted_input() {
        let merged = unify(&mut ivs(&[(200, 300), (10, 20), (0, 15), (301, 400)]));
        assert_eq!(merged, ivs(&[(0, 20), (200, 300), (301, 400)]));
        assert_canonical(&merged);
    }

    #[test]
    fn test_unify_contained_interval() {
        let merged = unify(&mut ivs(&[(0, 100), (10, 20), (30, 40)]));
        assert_eq!(merged, ivs(&[(0, 100)]));
    }

    #[test]
    fn test_unify_same_start_different_ends() {
        // Tie order on start must not matter.
        let a = unify(&mut ivs(&[(0, 10), (0, 50), (60, 70)]));
        let b = unify(&mut ivs(&[(0, 50), (0, 10), (60, 70)]));
        assert_eq!(a, ivs(&[(0, 50), (60, 70)]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unify_zero_length_intervals() {
        let merged = unify(&mut ivs(&[(5, 5), (5, 10), (20, 20)]));
        assert_eq!(merged, ivs(&[(5, 10), (20, 20)]));
        assert_eq!(length(&merged), 5);
    }

    #[test]
    fn test_unify_is_idempotent() {
        let mut input = ivs(&[(7, 9), (0, 3), (3, 4), (8, 12), (20, 25), (24, 24)]);
        let mut once = unify(&mut input);
        let twice = unify(&mut once.clone());
        assert_eq!(once, twice);
        assert_canonical(&once);
        assert_eq!(unify(&mut once), twice);
    }

    #[test]
    fn test_unify_disjoint_input_unchanged() {
        let mut input = ivs(&[(30, 40), (0, 10), (15, 20)]);
        let before = length(&input);
        let merged = unify(&mut input);
        assert_eq!(merged, ivs(&[(0, 10), (15, 20), (30, 40)]));
        assert_eq!(length(&merged), before);
    }

    #[test]
    fn test_unify_length_covers_longest_run() {
        let mut input = ivs(&[(0, 10), (5, 30), (100, 110)]);
        let longest = input.iter().map(Interval::len).max().unwrap();
        let merged = unify(&mut input);
        assert!(length(&merged) >= longest);
        assert_eq!(length(&merged), 40);
    }

    #[test]
    fn test_length_does_not_deduplicate() {
        let overlapping = ivs(&[(0, 50), (20, 100)]);
        assert_eq!(length(&overlapping), 130);
    }

    #[test]
    fn test_length_empty() {
        assert_eq!(length(&[]), 0);
    }

    #[test]
    fn test_unify_extreme_timestamps() {
        let merged = unify(&mut ivs(&[(0, u64::MAX), (u64::MAX, u64::MAX)]));
        assert_eq!(merged, ivs(&[(0, u64::MAX)]));
        assert_eq!(length(&merged), u64::MAX);
    }

    #[test]
    fn test_interval_new_rejects_inverted() {
        assert!(Interval::new(10, 5).is_none());
        assert_eq!(Interval::new(5, 5), Some(Interval::from((5, 5))));
    }

    #[test]
    fn test_interval_hull() {
        let a = Interval::from((0, 10));
        let c = Interval::from((30, 40));
        assert_eq!(a.hull(&c), Interval::from((0, 40)));
        assert_eq!(c.hull(&a), Interval::from((0, 40)));
    }
}
