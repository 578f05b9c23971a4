use std::fs::File;
use std::io::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::errors::{RegionSetError, Result};

/// gzip (and therefore BGZF) member magic.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum FileType {
    BED,
    GTF,
    GFF,
    VCF,
    UNKNOWN,
}

impl FromStr for FileType {
    type Err = RegionSetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bed" | "narrowpeak" | "broadpeak" => Ok(FileType::BED),
            "gtf" | "gtf2" => Ok(FileType::GTF),
            "gff" | "gff3" => Ok(FileType::GFF),
            "vcf" => Ok(FileType::VCF),
            _ => Err(RegionSetError::UnknownFormat(s.to_string())),
        }
    }
}

pub struct FileInfo {
    pub file_type: FileType,
    pub is_gzipped: bool,
}

///
/// Guess the file type and compression of a path from its extension(s).
///
/// `genes.gtf.gz` and `calls.vcf.bgz` are recognised; anything else is
/// [FileType::UNKNOWN] and left to [sniff_file_type].
///
pub fn get_file_info(path: &Path) -> FileInfo {
    let filename = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let (base, is_gzipped) = match filename
        .strip_suffix(".gz")
        .or_else(|| filename.strip_suffix(".bgz"))
    {
        Some(base) => (base.to_string(), true),
        None => (filename, false),
    };

    let file_type = Path::new(&base)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| FileType::from_str(e).ok())
        .unwrap_or(FileType::UNKNOWN);

    FileInfo {
        file_type,
        is_gzipped,
    }
}

///
/// Guess the file type from the first bytes of (decompressed) content.
///
/// VCF and GFF3 announce themselves in their first header line. A GTF line has
/// nine tab separated columns with integer coordinates in columns four and
/// five. Everything else is treated as BED.
///
pub fn sniff_file_type(head: &[u8]) -> FileType {
    let text = String::from_utf8_lossy(head);
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let first = match lines.next() {
        Some(line) => line,
        None => return FileType::BED,
    };

    if first.starts_with("##fileformat=VCF") {
        return FileType::VCF;
    }
    if first.starts_with("##gff-version") {
        return FileType::GFF;
    }

    let data_line = std::iter::once(first)
        .chain(lines)
        .find(|l| !l.starts_with('#') && !l.starts_with("track") && !l.starts_with("browser"));

    match data_line {
        Some(line) => {
            let fields: Vec<&str> = line.split('\t').collect();
            let looks_like_gtf = fields.len() == 9
                && fields[3].parse::<u64>().is_ok()
                && fields[4].parse::<u64>().is_ok();
            if looks_like_gtf {
                FileType::GTF
            } else {
                FileType::BED
            }
        }
        None => FileType::BED,
    }
}

///
/// Wrap any reader, transparently decoding gzip/BGZF when the stream starts
/// with the gzip magic bytes.
///
pub fn wrap_maybe_gzipped<R: Read + 'static>(inner: R) -> Result<BufReader<Box<dyn Read>>> {
    let mut peeked = BufReader::new(inner);
    let is_gzipped = peeked.fill_buf()?.starts_with(&GZIP_MAGIC);

    let reader: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(peeked)),
        false => Box::new(peeked),
    };

    Ok(BufReader::new(reader))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    if !path.is_file() {
        return Err(RegionSetError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| RegionSetError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {}", path.display());
    wrap_maybe_gzipped(file)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        wrap_maybe_gzipped(std::io::stdin())
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}
