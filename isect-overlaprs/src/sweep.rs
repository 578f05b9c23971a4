//! Plane-sweep intersection of two region sets.
//!
//! Both sides are sorted by `(chr, start, end)` once; A is then walked in
//! order while a window of "active" B regions is maintained per chromosome.
//! B regions enter the window when they start before the current A region
//! ends and leave it once they end at or before the current A region starts.
//! Since A starts never decrease within a chromosome, a region that left the
//! window can never overlap a later A region.

use isect_core::models::{Region, RegionSet};

use crate::intersect::{Hit, Strandedness};

///
/// Lazy sweep over two region sets, yielding one [Hit] per A region.
///
/// ```
/// use isect_core::models::{Region, RegionSet};
/// use isect_overlaprs::{Strandedness, SweepIntersect};
///
/// let genes = RegionSet::from(vec![
///     Region::new("chr1", 100, 200).unwrap(),
///     Region::new("chr1", 300, 400).unwrap(),
/// ]);
/// let snps = RegionSet::from(vec![Region::new("chr1", 150, 151).unwrap()]);
///
/// let overlapping: Vec<u32> = SweepIntersect::new(&genes, &snps, Strandedness::Ignore)
///     .filter(|hit| hit.has_overlap())
///     .map(|hit| hit.query.start)
///     .collect();
/// assert_eq!(overlapping, vec![100]);
/// ```
pub struct SweepIntersect<'a> {
    queries: Vec<&'a Region>,
    targets: Vec<&'a Region>,
    query_pos: usize,
    target_pos: usize,
    /// B regions on the current chromosome that may still overlap upcoming queries
    active: Vec<&'a Region>,
    chr: Option<&'a str>,
    strandedness: Strandedness,
}

impl<'a> SweepIntersect<'a> {
    pub fn new(a: &'a RegionSet, b: &'a RegionSet, strandedness: Strandedness) -> Self {
        let mut queries: Vec<&Region> = a.regions.iter().collect();
        queries.sort();

        // empty regions match nothing, keep them out of the window
        let mut targets: Vec<&Region> = b.regions.iter().filter(|r| !r.is_empty()).collect();
        targets.sort();

        SweepIntersect {
            queries,
            targets,
            query_pos: 0,
            target_pos: 0,
            active: Vec::new(),
            chr: None,
            strandedness,
        }
    }

    /// Reset the window and skip B regions on chromosomes sorting before `chr`.
    fn enter_chromosome(&mut self, chr: &'a str) {
        self.active.clear();
        self.chr = Some(chr);
        while let Some(target) = self.targets.get(self.target_pos) {
            if target.chr.as_str() >= chr {
                break;
            }
            self.target_pos += 1;
        }
    }
}

impl<'a> Iterator for SweepIntersect<'a> {
    type Item = Hit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let query = *self.queries.get(self.query_pos)?;
        self.query_pos += 1;

        if self.chr != Some(query.chr.as_str()) {
            self.enter_chromosome(query.chr.as_str());
        }

        while let Some(&target) = self.targets.get(self.target_pos) {
            if target.chr != query.chr || target.start >= query.end {
                break;
            }
            self.active.push(target);
            self.target_pos += 1;
        }

        self.active.retain(|target| target.end > query.start);

        let matches = self
            .active
            .iter()
            .copied()
            .filter(|target| query.overlaps(target) && self.strandedness.accepts(query, target))
            .collect();

        Some(Hit { query, matches })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.queries.len() - self.query_pos;
        (left, Some(left))
    }
}
