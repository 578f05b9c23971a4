//! Entry points for intersecting two [RegionSet]s.

use std::str::FromStr;

use log::{debug, warn};

use isect_core::models::{Region, RegionSet};

use crate::errors::IntersectError;
use crate::index::IndexIntersect;
use crate::sweep::SweepIntersect;
use crate::Backend;

/// One A region together with every B region overlapping it.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<'a> {
    pub query: &'a Region,
    pub matches: Vec<&'a Region>,
}

impl Hit<'_> {
    pub fn has_overlap(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Strand requirement for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strandedness {
    /// Strand is not considered.
    #[default]
    Ignore,
    /// Both strands must be known and equal.
    Same,
    /// Both strands must be known and differ.
    Opposite,
}

impl Strandedness {
    #[inline]
    pub fn accepts(&self, a: &Region, b: &Region) -> bool {
        match self {
            Strandedness::Ignore => true,
            Strandedness::Same => a.strand.is_some() && a.strand == b.strand,
            Strandedness::Opposite => {
                a.strand.is_some() && b.strand.is_some() && a.strand != b.strand
            }
        }
    }
}

impl FromStr for Strandedness {
    type Err = IntersectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" | "any" => Ok(Strandedness::Ignore),
            "same" => Ok(Strandedness::Same),
            "opposite" => Ok(Strandedness::Opposite),
            _ => Err(IntersectError::UnknownStrandedness(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectOptions {
    pub backend: Backend,
    pub strandedness: Strandedness,
}

///
/// Intersect `a` with `b`, yielding one [Hit] per region of `a` sorted by
/// `(chr, start, end)`, whether it overlaps anything or not.
///
/// Neither input needs to be sorted. Chromosomes are matched by exact name;
/// a warning is logged when both sets are non-empty but share no chromosome,
/// which usually means mixed naming conventions (`chr1` vs `1`).
///
/// # Arguments
/// - a: the features to report on
/// - b: the regions to test against
/// - opts: backend and strand requirement
pub fn intersect<'a>(
    a: &'a RegionSet,
    b: &'a RegionSet,
    opts: &IntersectOptions,
) -> Box<dyn Iterator<Item = Hit<'a>> + 'a> {
    if !a.is_empty() && !b.is_empty() && !a.shares_chroms_with(b) {
        warn!(
            "The two region sets share no chromosome names (e.g. '{}' vs '{}'); \
             no overlaps will be found. Check the chromosome naming convention.",
            a.regions[0].chr, b.regions[0].chr
        );
    }
    debug!(
        "Intersecting {} x {} regions with {:?} backend",
        a.len(),
        b.len(),
        opts.backend
    );

    match opts.backend {
        Backend::Sweep => Box::new(SweepIntersect::new(a, b, opts.strandedness)),
        Backend::Index => Box::new(IndexIntersect::new(a, b, opts.strandedness)),
    }
}

///
/// Convenience methods for intersecting region sets.
///
/// ```
/// use isect_core::models::{Region, RegionSet};
/// use isect_overlaprs::Intersect;
///
/// let genes = RegionSet::from(vec![
///     Region::new("chr1", 100, 200).unwrap(),
///     Region::new("chr1", 300, 400).unwrap(),
/// ]);
/// let snps = RegionSet::from(vec![
///     Region::new("chr1", 150, 160).unwrap(),
///     Region::new("chr2", 50, 60).unwrap(),
/// ]);
///
/// let hit_genes = genes.intersect(&snps);
/// assert_eq!(hit_genes.len(), 1);
/// assert_eq!(hit_genes.regions[0].start, 100);
/// ```
pub trait Intersect {
    /// The regions of `self` overlapping at least one region of `other`, sorted.
    fn intersect(&self, other: &RegionSet) -> RegionSet;

    /// Every region of `self` paired with its overlapping regions of `other`.
    fn intersect_with<'a>(
        &'a self,
        other: &'a RegionSet,
        opts: &IntersectOptions,
    ) -> Box<dyn Iterator<Item = Hit<'a>> + 'a>;
}

impl Intersect for RegionSet {
    fn intersect(&self, other: &RegionSet) -> RegionSet {
        intersect(self, other, &IntersectOptions::default())
            .filter(|hit| hit.has_overlap())
            .map(|hit| hit.query.clone())
            .collect()
    }

    fn intersect_with<'a>(
        &'a self,
        other: &'a RegionSet,
        opts: &IntersectOptions,
    ) -> Box<dyn Iterator<Item = Hit<'a>> + 'a> {
        intersect(self, other, opts)
    }
}
