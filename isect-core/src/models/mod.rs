pub mod chrom;
pub mod interval;
pub mod region;
pub mod region_set;
pub mod strand;

// re-export for cleaner imports
pub use self::chrom::ChromNaming;
pub use self::interval::Interval;
pub use self::region::Region;
pub use self::region_set::RegionSet;
pub use self::strand::Strand;
