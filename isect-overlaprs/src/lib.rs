//! Genomic interval intersection in Rust.
//!
//! Given two region sets A and B, this crate reports for every region of A
//! which regions of B it overlaps. Intervals are half-open (`[start, end)`),
//! chromosomes are matched by exact name, and zero-length intervals never
//! overlap anything.
//!
//! ## Features
//!
//! - **Two backends**: a plane sweep over both sorted sets (default) and a
//!   per-chromosome sorted-start index queried once per A region
//! - **Lazy results**: intersection yields an iterator of [`Hit`]s, so callers may stop early
//! - **Report modes**: `any`, `portion`, `pairs`, `none` and `count` views over the hits
//!
//! ## Quick Start
//!
//! ```rust
//! use isect_core::models::{Region, RegionSet};
//! use isect_overlaprs::{IntersectMode, IntersectOptions, intersect, report};
//!
//! let genes = RegionSet::from(vec![
//!     Region::new("chr1", 100, 200).unwrap(),
//!     Region::new("chr1", 300, 400).unwrap(),
//! ]);
//! let snps = RegionSet::from(vec![
//!     Region::new("chr1", 150, 160).unwrap(),
//!     Region::new("chr2", 50, 60).unwrap(),
//! ]);
//!
//! let hits = intersect(&genes, &snps, &IntersectOptions::default());
//! let lines: Vec<String> = report(hits, IntersectMode::Any)
//!     .map(|r| r.to_string())
//!     .collect();
//!
//! assert_eq!(lines, vec!["chr1\t100\t200"]);
//! ```
//!
//! ## Single-sequence queries
//!
//! The [`SortedIndex`] behind the index backend is usable on its own through
//! the [`Overlapper`] trait:
//!
//! ```rust
//! use isect_overlaprs::{Interval, Overlapper, SortedIndex};
//!
//! let exons = vec![
//!     Interval { start: 1000u32, end: 1200, val: "exon1" },
//!     Interval { start: 3000, end: 3100, val: "exon2" },
//! ];
//! let index = SortedIndex::build(exons);
//!
//! let names: Vec<&str> = index.find_iter(1100, 3050).map(|iv| iv.val).collect();
//! assert_eq!(names, vec!["exon1", "exon2"]);
//! ```

use std::str::FromStr;

pub mod errors;

/// Sorted-start interval index and the index backend.
///
/// See [`SortedIndex`] for details.
pub mod index;

pub mod intersect;
pub mod report;

/// Plane-sweep backend.
///
/// See [`SweepIntersect`] for details.
pub mod sweep;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

// re-exports
pub use self::errors::IntersectError;
pub use self::index::{IndexIntersect, SortedIndex};
pub use self::intersect::{Hit, Intersect, IntersectOptions, Strandedness, intersect};
pub use self::report::{IntersectMode, Report, report};
pub use self::sweep::SweepIntersect;
pub use self::traits::{Interval, Overlapper};

/// The intersection algorithm to use.
///
/// Both produce the same hits in the same order.
///
/// * `Sweep` - Sort both sets and walk them together. Best when A and B are
///   of comparable size.
/// * `Index` - Index B per chromosome and query each A region. Best when A
///   is small compared to B.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Sweep,
    Index,
}

impl FromStr for Backend {
    type Err = IntersectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sweep" => Ok(Backend::Sweep),
            "index" => Ok(Backend::Index),
            _ => Err(IntersectError::UnknownBackend(s.to_string())),
        }
    }
}

/// Constants used throughout the crate.
pub mod consts {
    /// The command name for intersect operations.
    pub const INTERSECT_CMD: &str = "intersect";
}
