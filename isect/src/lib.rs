//! # isect
//!
//! Intersect genomic interval files. The functionality lives in member
//! crates, re-exported here behind features:
//!
//! - `core`: the data model and BED/GTF/GFF/VCF parsers
//! - `overlaprs`: the intersection engine
//! - `io`: BED and plain-text writers
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use isect::core::parsers::{ParseOptions, read_region_set};
//! use isect::overlaprs::{IntersectMode, IntersectOptions, intersect, report};
//!
//! let genes = read_region_set(Path::new("genes.gtf.gz"), &ParseOptions::default()).unwrap();
//! let snps = read_region_set(Path::new("variants.vcf"), &ParseOptions::default()).unwrap();
//!
//! for record in report(intersect(&genes, &snps, &IntersectOptions::default()), IntersectMode::Any) {
//!     println!("{}", record);
//! }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use isect_core as core;

#[cfg(feature = "io")]
#[doc(inline)]
pub use isect_io as io;

#[cfg(feature = "overlaprs")]
#[doc(inline)]
pub use isect_overlaprs as overlaprs;
