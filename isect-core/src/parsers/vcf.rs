use super::{ParsedLine, checked_region, parse_coord};

///
/// Parse one line of a VCF file.
///
/// A record covers its reference allele: `[POS - 1, POS - 1 + len(REF))`.
/// Symbolic structural variants carrying `END=` in INFO extend to that
/// position instead. The metadata is `ID\tREF\tALT`.
///
pub fn parse_vcf_line(line: &str) -> Result<ParsedLine, String> {
    if line.starts_with('#') {
        return Ok(ParsedLine::Header);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 5 {
        return Err(format!(
            "expected at least 5 tab separated columns (CHROM POS ID REF ALT), found {}",
            fields.len()
        ));
    }

    let pos = parse_coord(Some(fields[1]), "POS")?;
    let id = fields[2];
    let reference = fields[3];
    let alt = fields[4];

    // POS 0 is reserved for telomeric breakends and maps onto the first base
    let start = pos.saturating_sub(1);
    let ref_len = u32::try_from(reference.len().max(1))
        .map_err(|_| format!("REF allele too long: {} bases", reference.len()))?;

    let end = match fields.get(7).and_then(|info| info_end(info)) {
        Some(end) => end?,
        None => start
            .checked_add(ref_len)
            .ok_or_else(|| "record extends past the maximum coordinate".to_string())?,
    };

    let rest = format!("{}\t{}\t{}", id, reference, alt);
    Ok(ParsedLine::Record(
        checked_region(fields[0], start, end)?.with_rest(Some(rest)),
    ))
}

/// Extract `END=` from an INFO column.
fn info_end(info: &str) -> Option<Result<u32, String>> {
    info.split(';')
        .find_map(|kv| kv.strip_prefix("END="))
        .map(|v| parse_coord(Some(v), "INFO/END"))
}
