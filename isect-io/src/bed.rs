use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use isect_core::models::RegionSet;
use isect_core::parsers::bed::is_comment_line;

use crate::error::Result;
use crate::writer::{create_with_parents, write_lines};

///
/// Write a region set back to disk as BED.
///
/// Header lines kept at load time are written first. Comment, `track` and
/// `browser` lines are written unchanged, anything else gets a `# ` prefix. Metadata columns follow the
/// coordinates unchanged, so GTF and VCF records come out as BED6+ lines.
///
pub trait BedWrite {
    ///
    /// Write data to disk as bed file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write data to disk as bed.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

fn write_region_set<W: Write>(rs: &RegionSet, writer: &mut W) -> Result<()> {
    if let Some(header) = &rs.header {
        for line in header.lines() {
            match is_comment_line(line) {
                true => writeln!(writer, "{}", line)?,
                false => writeln!(writer, "# {}", line)?,
            }
        }
    }
    write_lines(writer, rs.regions.iter().map(|r| r.as_string()))?;
    Ok(())
}

impl BedWrite for RegionSet {
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let mut file = BufWriter::new(create_with_parents(path.as_ref())?);
        write_region_set(self, &mut file)
    }

    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_with_parents(path.as_ref())?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        write_region_set(self, &mut encoder)?;
        encoder.finish()?.flush()?;
        Ok(())
    }
}
