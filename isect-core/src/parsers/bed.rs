use super::{ParsedLine, checked_region, parse_coord};
use crate::models::Strand;

///
/// Parse one line of a BED (or BED-like: narrowPeak, bedGraph, ...) file.
///
/// Lines starting with `#`, `track` or `browser` are headers. When
/// `first_line` is set, a line whose start column is not a number is taken as
/// a column header (`chrom start end ...`) instead of an error.
///
/// # Arguments
/// - line: the raw line, without trailing newline
/// - first_line: whether this is the first line that is not a comment
pub fn parse_bed_line(line: &str, first_line: bool) -> Result<ParsedLine, String> {
    if is_comment_line(line) {
        return Ok(ParsedLine::Header);
    }

    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 3 {
        return Err(format!(
            "expected at least 3 tab separated columns, found {}",
            parts.len()
        ));
    }

    if first_line && parts[1].trim().parse::<i64>().is_err() {
        return Ok(ParsedLine::Header);
    }

    let start = parse_coord(Some(parts[1]), "start")?;
    let end = parse_coord(Some(parts[2]), "end")?;

    let strand = parts.get(5).and_then(|s| Strand::parse_column(s));
    let rest = Some(parts[3..].join("\t"));

    Ok(ParsedLine::Record(
        checked_region(parts[0], start, end)?
            .with_strand(strand)
            .with_rest(rest),
    ))
}

/// `#` comments and UCSC `track`/`browser` lines.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("track") || line.starts_with("browser")
}
