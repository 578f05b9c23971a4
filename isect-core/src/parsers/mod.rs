//! Line parsers turning BED, GTF/GFF and VCF text into [Region]s.
//!
//! Every parser converts its native coordinate system into 0-based,
//! half-open coordinates and rejects `start > end` before a [Region] is
//! ever built, so downstream code can rely on validated intervals.

pub mod bed;
pub mod gtf;
pub mod vcf;

use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use crate::errors::{RegionSetError, Result};
use crate::models::{ChromNaming, Region, RegionSet};
use crate::utils::{FileType, get_dynamic_reader_w_stdin, get_file_info, sniff_file_type};

///
/// Options controlling how an interval file is loaded.
///
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Force a file type instead of detecting it from the extension or content.
    pub file_type: Option<FileType>,
    /// Keep only GTF/GFF records with this feature type (e.g. `exon`).
    pub feature: Option<String>,
    /// Chromosome naming convention to rewrite names into.
    pub chrom_naming: ChromNaming,
}

/// Outcome of parsing one line of an interval file.
#[derive(Debug, PartialEq)]
pub enum ParsedLine {
    /// Comment, meta or column header line.
    Header,
    /// A data line that was filtered out (e.g. by feature type).
    Skipped,
    Record(Region),
}

///
/// Parse every line of `reader` as `file_type`.
///
/// # Arguments
/// - reader: decompressed line source
/// - file_type: format of the lines, must not be [FileType::UNKNOWN]
/// - origin: name of the source used in error messages
/// - opts: load options
pub fn read_regions<R: BufRead>(
    reader: R,
    file_type: FileType,
    origin: &str,
    opts: &ParseOptions,
) -> Result<RegionSet> {
    let mut regions: Vec<Region> = Vec::new();
    let mut header = String::new();
    let mut skipped = 0usize;
    // a BED column header may only precede the first data line
    let mut first_line = true;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        let parsed = match file_type {
            FileType::BED => bed::parse_bed_line(&line, first_line),
            FileType::GTF => gtf::parse_gtf_line(&line, opts.feature.as_deref()),
            FileType::GFF => gtf::parse_gff_line(&line, opts.feature.as_deref()),
            FileType::VCF => vcf::parse_vcf_line(&line),
            FileType::UNKNOWN => {
                return Err(RegionSetError::UnknownFormat(origin.to_string()));
            }
        }
        .map_err(|reason| RegionSetError::at_line(origin, line_no, &line, reason))?;

        if !bed::is_comment_line(&line) {
            first_line = false;
        }

        match parsed {
            ParsedLine::Header => {
                if !header.is_empty() {
                    header.push('\n');
                }
                header.push_str(&line);
            }
            ParsedLine::Skipped => skipped += 1,
            ParsedLine::Record(mut region) => {
                if opts.chrom_naming != ChromNaming::AsIs {
                    region.chr = opts.chrom_naming.apply(&region.chr).into_owned();
                }
                regions.push(region);
            }
        }
    }

    if regions.is_empty() {
        warn!("No regions found in {}", origin);
    }
    if skipped > 0 {
        debug!("Skipped {} records of {} by feature filter", skipped, origin);
    }
    info!("Loaded {} regions from {} ({:?})", regions.len(), origin, file_type);

    Ok(RegionSet {
        regions,
        header: match header.is_empty() {
            true => None,
            false => Some(header),
        },
        path: None,
    })
}

///
/// Open, decompress, detect and parse an interval file.
///
/// # Arguments
/// - path: path to the file, or `-` for stdin
/// - opts: load options
pub fn read_region_set(path: &Path, opts: &ParseOptions) -> Result<RegionSet> {
    let path_str = path.to_string_lossy();
    let mut reader = get_dynamic_reader_w_stdin(&path_str)?;

    let file_type = match opts.file_type {
        Some(file_type) => file_type,
        None => match get_file_info(path).file_type {
            FileType::UNKNOWN => {
                let sniffed = sniff_file_type(reader.fill_buf()?);
                debug!("Sniffed {} as {:?}", path_str, sniffed);
                sniffed
            }
            known => known,
        },
    };

    let mut rs = read_regions(reader, file_type, &path_str, opts)?;
    if path_str != "-" {
        rs.path = Some(path.to_path_buf());
    }
    Ok(rs)
}

/// Parse a mandatory unsigned coordinate column.
pub(crate) fn parse_coord(field: Option<&str>, name: &str) -> std::result::Result<u32, String> {
    let field = field.ok_or_else(|| format!("missing {} column", name))?;
    field
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid {} '{}': {}", name, field, e))
}

/// Build a validated region, turning inverted coordinates into a parse failure.
pub(crate) fn checked_region(chr: &str, start: u32, end: u32) -> std::result::Result<Region, String> {
    if chr.is_empty() {
        return Err("empty chromosome name".to_string());
    }
    Region::new(chr, start, end).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    #[rstest]
    fn test_read_regions_collects_header() {
        let text = "track name=x\n# comment\nchr1\t10\t20\nchr1\t30\t40\tpeak\n";
        let rs = read_regions(Cursor::new(text), FileType::BED, "mem", &ParseOptions::default())
            .unwrap();
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.header.as_deref(), Some("track name=x\n# comment"));
        assert_eq!(rs.regions[1].rest.as_deref(), Some("peak"));
    }

    #[rstest]
    fn test_read_regions_reports_line_number() {
        let text = "chr1\t10\t20\nchr1\t50\t40\n";
        let err = read_regions(Cursor::new(text), FileType::BED, "a.bed", &ParseOptions::default())
            .unwrap_err();
        match err {
            RegionSetError::Parse {
                origin,
                line,
                content,
                ..
            } => {
                assert_eq!(origin, "a.bed");
                assert_eq!(line, 2);
                assert_eq!(content, "chr1\t50\t40");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_only_first_data_line_can_be_column_header() {
        let text = "track name=x\nchrom\tstart\tend\nchr1\tx\t10\nchr1\tNaN\t20\nchr1\t5\t10\n";
        let err = read_regions(Cursor::new(text), FileType::BED, "mem", &ParseOptions::default())
            .unwrap_err();
        match err {
            RegionSetError::Parse { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "chr1\tx\t10");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_column_header_after_comments() {
        let text = "# comment\nchrom\tstart\tend\nchr1\t5\t10\n";
        let rs = read_regions(Cursor::new(text), FileType::BED, "mem", &ParseOptions::default())
            .unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.header.as_deref(), Some("# comment\nchrom\tstart\tend"));
    }

    #[rstest]
    fn test_read_regions_applies_chrom_naming() {
        let text = "1\t10\t20\nchrX\t1\t2\n";
        let opts = ParseOptions {
            chrom_naming: ChromNaming::Ucsc,
            ..Default::default()
        };
        let rs = read_regions(Cursor::new(text), FileType::BED, "mem", &opts).unwrap();
        let chroms: Vec<&str> = rs.regions.iter().map(|r| r.chr.as_str()).collect();
        assert_eq!(chroms, vec!["chr1", "chrX"]);
    }

    #[rstest]
    #[case("##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\nchr1\t151\trs1\tA\tG\n", FileType::VCF, 150, 151)]
    #[case("chr1\tsrc\tgene\t101\t200\t.\t+\t.\tgene_id \"G1\";\n", FileType::GTF, 100, 200)]
    #[case("chr1\t10\t20\n", FileType::BED, 10, 20)]
    fn test_read_region_set_sniffs_extensionless_file(
        #[case] text: &str,
        #[case] expected: FileType,
        #[case] start: u32,
        #[case] end: u32,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls");
        std::fs::write(&path, text).unwrap();

        assert_eq!(
            sniff_file_type(&std::fs::read(&path).unwrap()),
            expected
        );
        let rs = read_region_set(&path, &ParseOptions::default()).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!((rs.regions[0].start, rs.regions[0].end), (start, end));
        assert_eq!(rs.path.as_deref(), Some(path.as_path()));
    }

    #[rstest]
    fn test_read_region_set_sniffs_gzipped_extensionless_file() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotation");
        let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all(b"##gff-version 3\nchr1\tsrc\tgene\t1\t10\t.\t-\t.\tID=g1;Name=GENE1\n")
            .unwrap();
        encoder.finish().unwrap();

        let rs = read_region_set(&path, &ParseOptions::default()).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.regions[0].rest.as_deref(), Some("GENE1\t.\t-\tgene"));
    }

    #[rstest]
    fn test_read_regions_empty_input() {
        let rs = read_regions(Cursor::new(""), FileType::VCF, "mem", &ParseOptions::default())
            .unwrap();
        assert!(rs.is_empty());
        assert!(rs.header.is_none());
    }
}
