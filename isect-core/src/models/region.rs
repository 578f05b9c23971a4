use std::cmp::Ordering;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::RegionSetError;
use crate::models::Strand;

///
/// Region struct, one half-open genomic interval `[start, end)` on a chromosome.
///
/// `rest` holds any metadata columns beyond the coordinates (gene name,
/// variant id, ...), tab separated, exactly as they will be written back out.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub strand: Option<Strand>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rest: Option<String>,
}

impl Region {
    ///
    /// Create a new region, rejecting `start > end`.
    ///
    pub fn new(chr: impl Into<String>, start: u32, end: u32) -> Result<Self, RegionSetError> {
        let chr = chr.into();
        if start > end {
            return Err(RegionSetError::InvalidCoordinates { chr, start, end });
        }
        Ok(Region {
            chr,
            start,
            end,
            strand: None,
            rest: None,
        })
    }

    pub fn with_strand(mut self, strand: Option<Strand>) -> Self {
        self.strand = strand;
        self
    }

    pub fn with_rest(mut self, rest: Option<String>) -> Self {
        self.rest = rest.filter(|s| !s.is_empty());
        self
    }

    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// A zero-length region covers no bases and never overlaps anything.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    ///
    /// Check whether two regions share at least one base.
    ///
    /// Both regions are half-open, so `[0, 10)` and `[10, 20)` do not overlap.
    ///
    #[inline]
    pub fn overlaps(&self, other: &Region) -> bool {
        self.chr == other.chr && overlaps(self.start, self.end, other.start, other.end)
    }

    /// Number of bases shared with `other`, zero when they do not overlap.
    pub fn overlap_len(&self, other: &Region) -> u32 {
        if !self.overlaps(other) {
            return 0;
        }
        self.end.min(other.end) - self.start.max(other.start)
    }

    ///
    /// The part of this region covered by `other`, keeping this region's
    /// strand and metadata.
    ///
    pub fn clip_to(&self, other: &Region) -> Option<Region> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Region {
            chr: self.chr.clone(),
            start: self.start.max(other.start),
            end: self.end.min(other.end),
            strand: self.strand,
            rest: self.rest.clone(),
        })
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

///
/// Half-open overlap test on raw coordinates.
///
/// Zero-length intervals never overlap, even when they sit inside the other interval.
///
#[inline]
pub fn overlaps(s1: u32, e1: u32, s2: u32, e2: u32) -> bool {
    s1 < e1 && s2 < e2 && s1 < e2 && s2 < e1
}

impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chr
            .cmp(&other.chr)
            .then(self.start.cmp(&other.start))
            .then(self.end.cmp(&other.end))
            .then(self.strand.cmp(&other.strand))
            .then_with(|| self.rest.cmp(&other.rest))
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
