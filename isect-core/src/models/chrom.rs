use std::borrow::Cow;
use std::str::FromStr;

use crate::errors::RegionSetError;

///
/// Chromosome naming convention applied to regions at load time.
///
/// Names are never rewritten unless a convention other than [ChromNaming::AsIs]
/// is requested. `chr1` and `1` are different chromosomes as far as
/// intersection is concerned.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromNaming {
    /// Keep names exactly as they appear in the file.
    #[default]
    AsIs,
    /// `chr`-prefixed names (`chr1`, `chrX`, `chrM`).
    Ucsc,
    /// Bare names (`1`, `X`, `MT`).
    Ensembl,
}

impl ChromNaming {
    ///
    /// Rewrite a chromosome name into this convention.
    ///
    /// # Arguments
    /// - chr: the chromosome name to rewrite
    pub fn apply<'a>(&self, chr: &'a str) -> Cow<'a, str> {
        match self {
            ChromNaming::AsIs => Cow::Borrowed(chr),
            ChromNaming::Ucsc => {
                if has_chr_prefix(chr) {
                    Cow::Borrowed(chr)
                } else if chr == "MT" || chr == "M" {
                    Cow::Owned("chrM".to_string())
                } else {
                    Cow::Owned(format!("chr{}", chr))
                }
            }
            ChromNaming::Ensembl => {
                if !has_chr_prefix(chr) {
                    return Cow::Borrowed(chr);
                }
                let bare = &chr[3..];
                if bare == "M" || bare == "MT" {
                    Cow::Owned("MT".to_string())
                } else {
                    Cow::Owned(bare.to_string())
                }
            }
        }
    }
}

fn has_chr_prefix(chr: &str) -> bool {
    chr.len() > 3 && chr.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("chr"))
}

impl FromStr for ChromNaming {
    type Err = RegionSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asis" | "as-is" | "none" => Ok(ChromNaming::AsIs),
            "ucsc" | "chr" => Ok(ChromNaming::Ucsc),
            "ensembl" | "bare" => Ok(ChromNaming::Ensembl),
            _ => Err(RegionSetError::UnknownChromNaming(s.to_string())),
        }
    }
}
