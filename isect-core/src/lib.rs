//! Core models and readers for genomic interval files.
//!
//! A [models::RegionSet] is an in-memory collection of validated, 0-based,
//! half-open [models::Region]s. Region sets are loaded from BED, GTF/GFF3 or
//! VCF files, plain or gzip/BGZF compressed:
//!
//! ```no_run
//! use isect_core::models::RegionSet;
//!
//! let genes = RegionSet::try_from("gencode.annotation.gtf.gz").unwrap();
//! let snps = RegionSet::try_from("calls.vcf.gz").unwrap();
//! println!("{genes}, {snps}");
//! ```
pub mod errors;
pub mod models;
pub mod parsers;
pub mod utils;

pub use errors::RegionSetError;
