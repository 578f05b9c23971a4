use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;

use crate::error::{Result, WriteError};

///
/// Output destination returned by [get_dynamic_writer].
///
/// Call [DynamicWriter::finish] once done: for gzip output it writes the
/// stream trailer and reports any error doing so.
///
pub enum DynamicWriter {
    Stdout(BufWriter<io::StdoutLock<'static>>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl DynamicWriter {
    pub fn is_gzipped(&self) -> bool {
        matches!(self, DynamicWriter::Gzip(_))
    }

    /// Flush everything and, for gzip, write the trailer.
    pub fn finish(self) -> Result<()> {
        match self {
            DynamicWriter::Stdout(mut w) => w.flush()?,
            DynamicWriter::Plain(mut w) => w.flush()?,
            DynamicWriter::Gzip(encoder) => encoder.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DynamicWriter::Stdout(w) => w.write(buf),
            DynamicWriter::Plain(w) => w.write(buf),
            DynamicWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DynamicWriter::Stdout(w) => w.flush(),
            DynamicWriter::Plain(w) => w.flush(),
            DynamicWriter::Gzip(w) => w.flush(),
        }
    }
}

/// Create a file, creating missing parent directories first.
pub(crate) fn create_with_parents(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|_| WriteError::ParentDirectoryCreation(parent.to_path_buf()))?;
    }
    Ok(File::create(path)?)
}

///
/// Get a buffered writer for a path: `-` is stdout, a `.gz` extension
/// gets a gzip encoder, anything else a plain file.
///
/// Missing parent directories are created.
///
/// # Arguments
/// - path: where to write
pub fn get_dynamic_writer(path: &Path) -> Result<DynamicWriter> {
    if path.as_os_str() == "-" {
        return Ok(DynamicWriter::Stdout(BufWriter::new(io::stdout().lock())));
    }

    let file = BufWriter::new(create_with_parents(path)?);
    let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");
    debug!("Writing to {} (gzip: {})", path.display(), is_gzipped);

    match is_gzipped {
        true => Ok(DynamicWriter::Gzip(GzEncoder::new(file, Compression::default()))),
        false => Ok(DynamicWriter::Plain(file)),
    }
}

///
/// Write one line per record and flush.
///
/// Returns the number of lines written.
///
pub fn write_lines<W, I, D>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = D>,
    D: Display,
{
    let mut n = 0;
    for record in records {
        writeln!(writer, "{}", record)?;
        n += 1;
    }
    writer.flush()?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use flate2::read::MultiGzDecoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_plain_writer_creates_parents() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested/dir/out.bed");

        let mut writer = get_dynamic_writer(&path).unwrap();
        assert!(!writer.is_gzipped());
        let n = write_lines(&mut writer, ["chr1\t0\t10", "chr2\t5\t6"]).unwrap();
        assert_eq!(n, 2);
        writer.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "chr1\t0\t10\nchr2\t5\t6\n");
    }

    #[rstest]
    fn test_gz_writer_finish_writes_complete_stream() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.bed.gz");

        let mut writer = get_dynamic_writer(&path).unwrap();
        assert!(writer.is_gzipped());
        write_lines(&mut writer, vec![1, 2, 3]).unwrap();
        writer.finish().unwrap();

        // a missing trailer makes the decoder fail with UnexpectedEof
        let mut content = String::new();
        MultiGzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "1\n2\n3\n");
    }
}
