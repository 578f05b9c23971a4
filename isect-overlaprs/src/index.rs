//! Sorted-start interval index.
//!
//! Intervals are kept sorted by start. Remembering the longest interval
//! length bounds how far left of a query an overlapping interval can begin,
//! so a query is one binary search followed by a short forward scan. This is
//! the same trick BITS-style indexes use and works well when the index is
//! queried with many unrelated, unsorted intervals.

use fxhash::FxHashMap as HashMap;
use num_traits::{PrimInt, Unsigned, identities::zero};

use isect_core::models::{Region, RegionSet};

use crate::Overlapper;
use crate::intersect::{Hit, Strandedness};
use crate::traits::Interval;

/// Intervals of one sequence, sorted by `(start, end)`.
///
/// ```
/// use isect_overlaprs::{Interval, Overlapper, SortedIndex};
///
/// let reads = vec![
///     Interval { start: 100u32, end: 150, val: "read1" },
///     Interval { start: 200, end: 250, val: "read2" },
///     Interval { start: 225, end: 275, val: "read3" },
/// ];
/// let index = SortedIndex::build(reads);
///
/// assert_eq!(index.count(210, 240), 2);
/// assert!(!index.any(150, 200));
/// ```
#[derive(Debug, Clone)]
pub struct SortedIndex<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    intervals: Vec<Interval<I, T>>,
    /// The length of the longest interval
    max_len: I,
}

impl<I, T> Overlapper<I, T> for SortedIndex<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Sorting is stable: intervals with equal coordinates keep their input order.
    fn build(mut intervals: Vec<Interval<I, T>>) -> Self {
        intervals.sort();
        let max_len = intervals
            .iter()
            .map(|iv| iv.len())
            .max()
            .unwrap_or_else(zero::<I>);
        SortedIndex { intervals, max_len }
    }

    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, end).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(IterFind {
            intervals: &self.intervals,
            off: self.first_candidate(start),
            start,
            end,
        })
    }
}

impl<I, T> SortedIndex<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over all intervals in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<I, T>> {
        self.intervals.iter()
    }

    /// Index of the first interval that could overlap a query starting at `start`.
    #[inline]
    fn first_candidate(&self, start: I) -> usize {
        let floor = start.saturating_sub(self.max_len);
        self.intervals.partition_point(|iv| iv.start < floor)
    }
}

/// Iterator over the intervals of a [`SortedIndex`] that overlap a query.
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    intervals: &'a [Interval<I, T>],
    off: usize,
    start: I,
    end: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    type Item = &'a Interval<I, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(interval) = self.intervals.get(self.off) {
            if interval.start >= self.end {
                self.off = self.intervals.len();
                break;
            }
            self.off += 1;
            if interval.overlap(self.start, self.end) {
                return Some(interval);
            }
        }
        None
    }
}

///
/// Intersection backend that indexes B per chromosome and queries every A
/// interval independently.
///
/// Yields one [Hit] per A interval in `(chr, start, end)` order, exactly like
/// [crate::SweepIntersect].
///
pub struct IndexIntersect<'a> {
    queries: Vec<&'a Region>,
    pos: usize,
    targets: Vec<&'a Region>,
    index_maps: HashMap<&'a str, SortedIndex<u32, usize>>,
    strandedness: Strandedness,
}

impl<'a> IndexIntersect<'a> {
    pub fn new(a: &'a RegionSet, b: &'a RegionSet, strandedness: Strandedness) -> Self {
        let mut queries: Vec<&Region> = a.regions.iter().collect();
        queries.sort();

        let mut targets: Vec<&Region> = b.regions.iter().collect();
        targets.sort();

        // STEP 1: group interval handles by chromosome; val points into `targets`
        let mut intervals: HashMap<&str, Vec<Interval<u32, usize>>> = HashMap::default();
        for (idx, region) in targets.iter().enumerate() {
            intervals
                .entry(region.chr.as_str())
                .or_default()
                .push(Interval {
                    start: region.start,
                    end: region.end,
                    val: idx,
                });
        }

        // STEP 2: build one index per chromosome
        let index_maps = intervals
            .into_iter()
            .map(|(chr, chr_intervals)| (chr, SortedIndex::build(chr_intervals)))
            .collect();

        IndexIntersect {
            queries,
            pos: 0,
            targets,
            index_maps,
            strandedness,
        }
    }
}

impl<'a> Iterator for IndexIntersect<'a> {
    type Item = Hit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let query = *self.queries.get(self.pos)?;
        self.pos += 1;

        let matches = match self.index_maps.get(query.chr.as_str()) {
            Some(index) => index
                .find_iter(query.start, query.end)
                .map(|iv| self.targets[iv.val])
                .filter(|target| self.strandedness.accepts(query, target))
                .collect(),
            None => Vec::new(),
        };

        Some(Hit { query, matches })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.queries.len() - self.pos;
        (left, Some(left))
    }
}
