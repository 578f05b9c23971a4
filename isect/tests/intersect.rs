use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::*;

use isect::core::errors::RegionSetError;
use isect::core::models::{ChromNaming, RegionSet};
use isect::core::parsers::{ParseOptions, read_region_set};
use isect::core::utils::FileType;
use isect::io::{BedWrite, get_dynamic_writer, write_lines};
use isect::overlaprs::{
    Backend, Intersect, IntersectMode, IntersectOptions, Strandedness, intersect, report,
};

#[fixture]
fn path_to_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/data/regionset")
}

fn load(dir: &Path, name: &str, opts: &ParseOptions) -> RegionSet {
    read_region_set(&dir.join(name), opts).unwrap()
}

fn lines(a: &RegionSet, b: &RegionSet, opts: &IntersectOptions, mode: IntersectMode) -> Vec<String> {
    report(intersect(a, b, opts), mode)
        .map(|r| r.to_string())
        .collect()
}

#[rstest]
#[case(Backend::Sweep)]
#[case(Backend::Index)]
fn test_genes_hit_by_variants(path_to_data: PathBuf, #[case] backend: Backend) {
    let genes = load(&path_to_data, "genes.gtf", &ParseOptions::default());
    let variants = load(&path_to_data, "variants.vcf", &ParseOptions::default());
    let opts = IntersectOptions {
        backend,
        ..Default::default()
    };

    assert_eq!(
        lines(&genes, &variants, &opts, IntersectMode::Any),
        vec![
            "chr1\t100\t130\tGENEA\t.\t+\texon",
            "chr1\t100\t200\tGENEA\t.\t+\tgene",
            "chr2\t1000\t2000\tGENEC\t.\t+\tgene",
        ]
    );
}

#[rstest]
fn test_exonic_variants_only(path_to_data: PathBuf) {
    let exons = load(
        &path_to_data,
        "genes.gtf",
        &ParseOptions {
            feature: Some("exon".to_string()),
            ..Default::default()
        },
    );
    let variants = load(&path_to_data, "variants.vcf", &ParseOptions::default());

    assert_eq!(exons.len(), 4);
    let hit = exons.intersect(&variants);
    assert_eq!(hit.len(), 1);
    assert_eq!((hit.regions[0].start, hit.regions[0].end), (100, 130));
}

#[rstest]
fn test_variants_in_genes_portion_and_count(path_to_data: PathBuf) {
    let genes = load(
        &path_to_data,
        "genes.gtf",
        &ParseOptions {
            feature: Some("gene".to_string()),
            ..Default::default()
        },
    );
    let variants = load(&path_to_data, "variants.vcf", &ParseOptions::default());
    let opts = IntersectOptions::default();

    assert_eq!(
        lines(&genes, &variants, &opts, IntersectMode::Count),
        vec![
            "chr1\t100\t200\tGENEA\t.\t+\tgene\t2",
            "chr1\t300\t400\tGENEB\t.\t-\tgene\t0",
            "chr2\t1000\t2000\tGENEC\t.\t+\tgene\t1",
            "chrX\t5000\t6000\tGENED\t.\t+\tgene\t0",
        ]
    );

    let portions: Vec<(u32, u32)> = report(intersect(&genes, &variants, &opts), IntersectMode::Portion)
        .map(|r| (r.region().start, r.region().end))
        .collect();
    assert_eq!(portions, vec![(119, 120), (150, 151), (1499, 1500)]);

    // variants as A: which ones fall outside every gene
    assert_eq!(
        lines(&variants, &genes, &opts, IntersectMode::NoOverlap),
        vec!["chr1\t249\t250\trs3\tG\tA", "chr3\t9\t10\trs5\tA\tT"]
    );
}

#[rstest]
fn test_unstranded_variants_never_match_stranded(path_to_data: PathBuf) {
    let genes = load(&path_to_data, "genes.gtf", &ParseOptions::default());
    let variants = load(&path_to_data, "variants.vcf", &ParseOptions::default());
    let opts = IntersectOptions {
        strandedness: Strandedness::Same,
        ..Default::default()
    };

    assert!(lines(&genes, &variants, &opts, IntersectMode::Any).is_empty());
}

#[rstest]
fn test_chromosome_naming_mismatch(path_to_data: PathBuf) {
    let genes = load(&path_to_data, "genes.gtf", &ParseOptions::default());
    let variants = load(&path_to_data, "variants_ensembl.vcf", &ParseOptions::default());

    assert!(!genes.shares_chroms_with(&variants));
    assert!(genes.intersect(&variants).is_empty());

    // converting either side fixes it
    let ucsc = ParseOptions {
        chrom_naming: ChromNaming::Ucsc,
        ..Default::default()
    };
    let variants = load(&path_to_data, "variants_ensembl.vcf", &ucsc);
    assert_eq!(genes.intersect(&variants).len(), 3);

    let ensembl = ParseOptions {
        chrom_naming: ChromNaming::Ensembl,
        ..Default::default()
    };
    let genes = load(&path_to_data, "genes.gtf", &ensembl);
    let variants = load(&path_to_data, "variants_ensembl.vcf", &ParseOptions::default());
    assert_eq!(genes.intersect(&variants).len(), 3);
}

#[rstest]
fn test_gzipped_inputs_match_plain(path_to_data: PathBuf) {
    let opts = ParseOptions::default();
    let plain = load(&path_to_data, "genes.gtf", &opts).intersect(&load(&path_to_data, "variants.vcf", &opts));
    let gz = load(&path_to_data, "genes.gtf.gz", &opts).intersect(&load(&path_to_data, "variants.vcf.gz", &opts));

    assert_eq!(plain.regions, gz.regions);
}

#[rstest]
fn test_gff_against_bed(path_to_data: PathBuf) {
    let genes = load(&path_to_data, "annotation.gff3", &ParseOptions::default());
    let peaks = load(&path_to_data, "b.bed", &ParseOptions::default());

    let hit = genes.intersect(&peaks);
    assert_eq!(hit.len(), 1);
    assert_eq!(hit.regions[0].rest.as_deref(), Some("GENEA\t.\t+\tgene"));
}

#[rstest]
fn test_bed_scenario_and_pairs(path_to_data: PathBuf) {
    let a = load(&path_to_data, "a.bed", &ParseOptions::default());
    let b = load(&path_to_data, "b.bed", &ParseOptions::default());

    // the zero-length chr1:150-150 never overlaps
    assert_eq!(
        lines(&a, &b, &IntersectOptions::default(), IntersectMode::Pairs),
        vec!["chr1\t100\t200\tchr1\t150\t160\tpeak1\t0\t+"]
    );
}

#[rstest]
fn test_self_intersection(path_to_data: PathBuf) {
    let a = load(&path_to_data, "headers.bed", &ParseOptions::default());
    assert_eq!(a.len(), 3);
    assert_eq!(a.intersect(&a).len(), 3);
}

#[rstest]
fn test_forced_format_mismatch_is_a_parse_error(path_to_data: PathBuf) {
    let opts = ParseOptions {
        file_type: Some(FileType::VCF),
        ..Default::default()
    };
    let err = read_region_set(&path_to_data.join("a.bed"), &opts).unwrap_err();
    assert!(matches!(err, RegionSetError::Parse { line: 1, .. }));
}

#[rstest]
fn test_malformed_input_reports_line(path_to_data: PathBuf) {
    let err = read_region_set(&path_to_data.join("malformed.bed"), &ParseOptions::default())
        .unwrap_err();
    match err {
        RegionSetError::Parse { line, content, .. } => {
            assert_eq!(line, 3);
            assert_eq!(content, "chr1\t50\t40");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn test_missing_file(path_to_data: PathBuf) {
    let err = read_region_set(&path_to_data.join("nope.bed"), &ParseOptions::default())
        .unwrap_err();
    assert!(matches!(err, RegionSetError::FileNotFound(_)));
}

#[rstest]
fn test_write_results_and_reload(path_to_data: PathBuf) {
    let genes = load(&path_to_data, "genes.gtf", &ParseOptions::default());
    let variants = load(&path_to_data, "variants.vcf", &ParseOptions::default());
    let tempdir = tempfile::tempdir().unwrap();

    let hit = genes.intersect(&variants);
    let bed_path = tempdir.path().join("hits.bed.gz");
    hit.write_bed_gz(&bed_path).unwrap();
    assert_eq!(RegionSet::try_from(bed_path.as_path()).unwrap().regions, hit.regions);

    let txt_path = tempdir.path().join("out/counts.tsv");
    {
        let mut writer = get_dynamic_writer(&txt_path).unwrap();
        let n = write_lines(
            &mut writer,
            report(intersect(&genes, &variants, &IntersectOptions::default()), IntersectMode::Count),
        )
        .unwrap();
        assert_eq!(n, genes.len());
        writer.finish().unwrap();
    }
    let content = std::fs::read_to_string(&txt_path).unwrap();
    assert_eq!(content.lines().count(), genes.len());
}
