//! # Output utilities for genomic intervals.
//!
//! Small, convenient helpers for writing region sets and intersection
//! results to disk, gzip-compressed or plain, or to stdout.
//!
pub mod bed;
pub mod error;
pub mod writer;

// re-expose core functions
pub use bed::*;
pub use error::*;
pub use writer::*;
