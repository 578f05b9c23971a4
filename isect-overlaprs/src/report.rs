//! Turning a stream of [Hit]s into output records.

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use isect_core::models::Region;

use crate::errors::IntersectError;
use crate::intersect::Hit;

/// What to report for each A region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntersectMode {
    /// Each A region once if it overlaps anything.
    #[default]
    Any,
    /// The overlapping part of A, once per match.
    Portion,
    /// A and B side by side, once per match.
    Pairs,
    /// Each A region that overlaps nothing.
    NoOverlap,
    /// Every A region with its number of matches.
    Count,
}

impl FromStr for IntersectMode {
    type Err = IntersectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "u" => Ok(IntersectMode::Any),
            "portion" => Ok(IntersectMode::Portion),
            "pairs" | "wawb" => Ok(IntersectMode::Pairs),
            "none" | "v" => Ok(IntersectMode::NoOverlap),
            "count" | "c" => Ok(IntersectMode::Count),
            _ => Err(IntersectError::UnknownMode(s.to_string())),
        }
    }
}

/// One output record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Report<'a> {
    Feature { a: &'a Region },
    Portion { a: Region },
    Pair { a: &'a Region, b: &'a Region },
    Count { a: &'a Region, count: usize },
}

impl Report<'_> {
    /// The A side of the record, clipped for [Report::Portion].
    pub fn region(&self) -> &Region {
        match self {
            Report::Feature { a } | Report::Pair { a, .. } | Report::Count { a, .. } => *a,
            Report::Portion { a } => a,
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Feature { a } => write!(f, "{}", a.as_string()),
            Report::Portion { a } => write!(f, "{}", a.as_string()),
            Report::Pair { a, b } => write!(f, "{}\t{}", a.as_string(), b.as_string()),
            Report::Count { a, count } => write!(f, "{}\t{}", a.as_string(), count),
        }
    }
}

///
/// Map intersection hits to report records according to `mode`.
///
/// The result stays lazy; records come out in the order of the hits.
///
pub fn report<'a, H>(hits: H, mode: IntersectMode) -> Box<dyn Iterator<Item = Report<'a>> + 'a>
where
    H: Iterator<Item = Hit<'a>> + 'a,
{
    match mode {
        IntersectMode::Any => Box::new(
            hits.filter(|hit| hit.has_overlap())
                .map(|hit| Report::Feature { a: hit.query }),
        ),
        IntersectMode::NoOverlap => Box::new(
            hits.filter(|hit| !hit.has_overlap())
                .map(|hit| Report::Feature { a: hit.query }),
        ),
        IntersectMode::Count => Box::new(hits.map(|hit| Report::Count {
            a: hit.query,
            count: hit.matches.len(),
        })),
        IntersectMode::Pairs => Box::new(hits.flat_map(|hit| {
            let a = hit.query;
            hit.matches.into_iter().map(move |b| Report::Pair { a, b })
        })),
        IntersectMode::Portion => Box::new(hits.flat_map(|hit| {
            let a = hit.query;
            hit.matches
                .into_iter()
                .filter_map(move |b| a.clip_to(b))
                .map(|a| Report::Portion { a })
        })),
    }
}
