use std::collections::HashSet;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::{ChromNaming, Region};
use crate::parsers::{ParseOptions, read_region_set};

///
/// RegionSet struct, the representation of an interval file (BED, GTF, VCF, ...)
/// once it has been parsed into regions.
///
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

pub struct RegionSetIterator<'a> {
    region_set: &'a RegionSet,
    index: usize,
}

impl TryFrom<&Path> for RegionSet {
    type Error = RegionSetError;

    ///
    /// Create a new [RegionSet] from an interval file, detecting its format.
    ///
    /// # Arguments:
    /// - value: path to the file on disk, optionally gzip/bgzip compressed.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        RegionSet::from_path_with(value, &ParseOptions::default())
    }
}

impl TryFrom<&str> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<String> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RegionSet::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        RegionSet::try_from(value.as_path())
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet {
            regions,
            header: None,
            path: None,
        }
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<T: IntoIterator<Item = Region>>(iter: T) -> Self {
        RegionSet::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> Iterator for RegionSetIterator<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.region_set.regions.get(self.index)?;
        self.index += 1;
        Some(region)
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = RegionSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RegionSetIterator {
            region_set: self,
            index: 0,
        }
    }
}

impl IntoIterator for RegionSet {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl RegionSet {
    ///
    /// Load a [RegionSet] from disk with explicit options (forced format,
    /// feature filter, chromosome naming).
    ///
    /// # Arguments
    /// - path: path to the file, or `-` for stdin
    /// - opts: load options
    pub fn from_path_with<P: AsRef<Path>>(
        path: P,
        opts: &ParseOptions,
    ) -> Result<Self, RegionSetError> {
        read_region_set(path.as_ref(), opts)
    }

    pub fn iter(&self) -> RegionSetIterator<'_> {
        self.into_iter()
    }

    ///
    /// Iterate over the unique chromosome names in the set
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &String> {
        let unique_chroms: HashSet<&String> = self.regions.iter().map(|r| &r.chr).collect();
        unique_chroms.into_iter()
    }

    ///
    /// Iterate through regions located on specific Chromosome in RegionSet
    ///
    /// # Arguments
    /// - chr: chromosome name
    ///
    pub fn iter_chr_regions<'a>(&'a self, chr: &'a str) -> impl Iterator<Item = &'a Region> {
        self.regions.iter().filter(move |r| r.chr == chr)
    }

    ///
    /// Whether any chromosome name appears in both sets.
    ///
    pub fn shares_chroms_with(&self, other: &RegionSet) -> bool {
        let ours: HashSet<&str> = self.regions.iter().map(|r| r.chr.as_str()).collect();
        other.regions.iter().any(|r| ours.contains(r.chr.as_str()))
    }

    ///
    /// Rewrite every chromosome name into the given convention.
    ///
    pub fn with_chrom_naming(mut self, naming: ChromNaming) -> Self {
        if naming != ChromNaming::AsIs {
            for region in self.regions.iter_mut() {
                region.chr = naming.apply(&region.chr).into_owned();
            }
        }
        self
    }

    ///
    /// Sort regions by chromosome, start, end
    ///
    pub fn sort(&mut self) {
        self.regions.sort();
    }

    pub fn is_sorted(&self) -> bool {
        self.regions.is_sorted()
    }

    ///
    /// Is regionSet empty?
    ///
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    ///
    /// Get number of regions in RegionSet
    ///
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    ///
    /// Get total nucleotide count
    ///
    pub fn nucleotides_length(&self) -> u64 {
        self.regions.iter().map(|r| r.width() as u64).sum()
    }
}

impl Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionSet with {} regions.", self.len())
    }
}
