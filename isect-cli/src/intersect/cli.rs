use clap::{Arg, ArgAction, Command, arg};

pub use isect_overlaprs::consts::INTERSECT_CMD;

pub fn create_intersect_cli() -> Command {
    Command::new(INTERSECT_CMD)
        .about("Report the intervals of A that overlap intervals of B.")
        .arg_required_else_help(true)
        .arg(arg!(-a <A> "Input interval file A (BED, GTF, GFF or VCF; '-' for stdin)").required(true))
        .arg(arg!(-b <B> "Input interval file B (BED, GTF, GFF or VCF; '-' for stdin)").required(true))
        .arg(
            arg!(-m --mode <MODE> "What to report: any, portion, pairs, none or count")
                .required(false)
                .default_value("any"),
        )
        .arg(
            arg!(--backend <BACKEND> "Intersection backend (sweep or index)")
                .required(false)
                .default_value("sweep"),
        )
        .arg(
            Arg::new("same-strand")
                .long("same-strand")
                .action(ArgAction::SetTrue)
                .conflicts_with("opposite-strand")
                .help("Require overlaps to be on the same strand"),
        )
        .arg(
            Arg::new("opposite-strand")
                .long("opposite-strand")
                .action(ArgAction::SetTrue)
                .help("Require overlaps to be on opposite strands"),
        )
        .arg(
            Arg::new("a-format")
                .long("a-format")
                .required(false)
                .help("Force the format of A (bed, gtf, gff, vcf)"),
        )
        .arg(
            Arg::new("b-format")
                .long("b-format")
                .required(false)
                .help("Force the format of B (bed, gtf, gff, vcf)"),
        )
        .arg(arg!(--feature <TYPE> "Keep only GTF/GFF records of this feature type (e.g. exon)").required(false))
        .arg(
            Arg::new("chrom-naming")
                .long("chrom-naming")
                .required(false)
                .default_value("asis")
                .help("Rewrite chromosome names of both inputs: asis, ucsc or ensembl"),
        )
        .arg(
            arg!(-o --output <OUTPUT> "Output file, gzipped when ending in .gz (default: stdout)")
                .required(false)
                .default_value("-"),
        )
        .arg(arg!(--json "Write JSON lines instead of BED-like text"))
}
