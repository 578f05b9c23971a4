use super::{ParsedLine, checked_region, parse_coord};
use crate::models::Strand;

/// Attribute keys used to name a GTF record, in order of preference.
const GTF_NAME_KEYS: [&str; 3] = ["gene_name", "gene_id", "transcript_id"];
/// Attribute keys used to name a GFF3 record, in order of preference.
const GFF_NAME_KEYS: [&str; 2] = ["Name", "ID"];

#[derive(Clone, Copy)]
enum AttributeSyntax {
    /// `key "value"; key "value";`
    Gtf,
    /// `key=value;key=value`
    Gff,
}

///
/// Parse one line of a GTF (GFF2) file.
///
/// GTF coordinates are 1-based and inclusive; `[start, end]` becomes the
/// half-open region `[start - 1, end)`. The region's metadata is
/// `name\tscore\tstrand\tfeature`, so it reads as BED6 plus the feature type.
///
/// # Arguments
/// - line: the raw line
/// - feature: when set, records of any other feature type are skipped
pub fn parse_gtf_line(line: &str, feature: Option<&str>) -> Result<ParsedLine, String> {
    parse_feature_line(line, feature, AttributeSyntax::Gtf)
}

///
/// Parse one line of a GFF3 file. Same layout and coordinates as GTF, with
/// `key=value` attributes.
///
pub fn parse_gff_line(line: &str, feature: Option<&str>) -> Result<ParsedLine, String> {
    parse_feature_line(line, feature, AttributeSyntax::Gff)
}

fn parse_feature_line(
    line: &str,
    feature: Option<&str>,
    syntax: AttributeSyntax,
) -> Result<ParsedLine, String> {
    if line.starts_with('#') {
        return Ok(ParsedLine::Header);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 8 {
        return Err(format!(
            "expected at least 8 tab separated columns (attributes are optional), found {}",
            fields.len()
        ));
    }

    let feature_type = fields[2];
    if let Some(wanted) = feature {
        if feature_type != wanted {
            return Ok(ParsedLine::Skipped);
        }
    }

    let start = parse_coord(Some(fields[3]), "start")?;
    let end = parse_coord(Some(fields[4]), "end")?;
    if start == 0 {
        return Err("coordinates are 1-based, start must be at least 1".to_string());
    }
    if start > end {
        return Err(format!("start {} is greater than end {}", start, end));
    }

    let score = fields[5];
    let strand_col = fields[6];
    let attributes = fields.get(8).copied().unwrap_or_default();

    let name = pick_name(attributes, syntax).unwrap_or_else(|| feature_type.to_string());
    let rest = format!("{}\t{}\t{}\t{}", name, score, strand_col, feature_type);

    Ok(ParsedLine::Record(
        checked_region(fields[0], start - 1, end)?
            .with_strand(Strand::parse_column(strand_col))
            .with_rest(Some(rest)),
    ))
}

fn pick_name(attributes: &str, syntax: AttributeSyntax) -> Option<String> {
    let keys: &[&str] = match syntax {
        AttributeSyntax::Gtf => &GTF_NAME_KEYS,
        AttributeSyntax::Gff => &GFF_NAME_KEYS,
    };
    keys.iter()
        .find_map(|key| attribute(attributes, key, syntax))
        .map(|v| v.to_string())
}

///
/// Look up a single attribute value.
///
/// # Arguments
/// - attributes: the ninth column
/// - key: attribute name
fn attribute<'a>(
    attributes: &'a str,
    key: &str,
    syntax: AttributeSyntax,
) -> Option<&'a str> {
    attributes
        .split(';')
        .map(str::trim)
        .filter(|kv| !kv.is_empty())
        .find_map(|kv| {
            let (k, v) = match syntax {
                AttributeSyntax::Gtf => kv.split_once(' ')?,
                AttributeSyntax::Gff => kv.split_once('=')?,
            };
            (k == key).then(|| v.trim().trim_matches('"'))
        })
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    const GENE: &str = "chr1\tHAVANA\tgene\t11869\t14409\t.\t+\t.\tgene_id \"ENSG00000223972.5\"; gene_type \"transcribed_unprocessed_pseudogene\"; gene_name \"DDX11L1\"; level 2;";
    const EXON: &str = "chr1\tHAVANA\texon\t12613\t12721\t.\t+\t.\tgene_id \"ENSG00000223972.5\"; transcript_id \"ENST00000456328.2\";";

    fn record(parsed: ParsedLine) -> crate::models::Region {
        match parsed {
            ParsedLine::Record(region) => region,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[rstest]
    fn test_gtf_coordinates_become_half_open() {
        let region = record(parse_gtf_line(GENE, None).unwrap());
        assert_eq!(region.chr, "chr1");
        assert_eq!(region.start, 11868);
        assert_eq!(region.end, 14409);
        assert_eq!(region.width(), 14409 - 11869 + 1);
        assert_eq!(region.strand, Some(Strand::Forward));
        assert_eq!(region.rest.as_deref(), Some("DDX11L1\t.\t+\tgene"));
    }

    #[rstest]
    fn test_gtf_name_falls_back_to_gene_id() {
        let region = record(parse_gtf_line(EXON, None).unwrap());
        assert_eq!(region.rest.as_deref(), Some("ENSG00000223972.5\t.\t+\texon"));
    }

    #[rstest]
    fn test_feature_filter() {
        assert_eq!(parse_gtf_line(GENE, Some("exon")).unwrap(), ParsedLine::Skipped);
        assert!(matches!(
            parse_gtf_line(EXON, Some("exon")).unwrap(),
            ParsedLine::Record(_)
        ));
    }

    #[rstest]
    fn test_single_base_feature() {
        let line = "chr2\tsrc\tSNP\t10\t10\t.\t.\t.\t";
        let region = record(parse_gtf_line(line, None).unwrap());
        assert_eq!((region.start, region.end), (9, 10));
        assert_eq!(region.strand, None);
        assert_eq!(region.rest.as_deref(), Some("SNP\t.\t.\tSNP"));
    }

    #[rstest]
    fn test_gff3_attributes() {
        let line = "1\tensembl\tgene\t100\t200\t.\t-\t.\tID=gene:ENSG01;Name=TP53;biotype=protein_coding";
        let region = record(parse_gff_line(line, None).unwrap());
        assert_eq!((region.start, region.end), (99, 200));
        assert_eq!(region.strand, Some(Strand::Reverse));
        assert_eq!(region.rest.as_deref(), Some("TP53\t.\t-\tgene"));
    }

    #[rstest]
    #[case("chr1\tsrc\tgene\t0\t10\t.\t+\t.\t")]
    #[case("chr1\tsrc\tgene\t20\t10\t.\t+\t.\t")]
    #[case("chr1\tsrc\tgene\tx\t10\t.\t+\t.\t")]
    #[case("chr1\tsrc\tgene\t1\t10")]
    fn test_malformed(#[case] line: &str) {
        assert!(parse_gtf_line(line, None).is_err());
    }

    #[rstest]
    fn test_attributes_column_is_optional() {
        let region = record(parse_gtf_line("chr1\tsrc\tgene\t1\t10\t.\t+\t.", None).unwrap());
        assert_eq!((region.start, region.end), (0, 10));
        assert_eq!(region.rest.as_deref(), Some("gene\t.\t+\tgene"));

        let err = parse_gtf_line("chr1\tsrc\tgene\t1\t10\t.\t+", None).unwrap_err();
        assert!(err.contains("at least 8"), "{err}");
    }

    #[rstest]
    fn test_header() {
        assert_eq!(
            parse_gtf_line("##description: evidence-based annotation", None).unwrap(),
            ParsedLine::Header
        );
    }
}
