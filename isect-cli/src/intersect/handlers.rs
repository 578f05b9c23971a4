use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use isect_core::models::{ChromNaming, RegionSet};
use isect_core::parsers::{ParseOptions, read_region_set};
use isect_core::utils::FileType;
use isect_io::{get_dynamic_writer, write_lines};
use isect_overlaprs::{
    Backend, IntersectMode, IntersectOptions, Strandedness, intersect, report,
};

pub fn run_intersect(matches: &ArgMatches) -> Result<()> {
    let a_path = matches.get_one::<String>("A").context("-a is required")?;
    let b_path = matches.get_one::<String>("B").context("-b is required")?;

    if a_path == "-" && b_path == "-" {
        anyhow::bail!("Only one of -a and -b can be read from stdin");
    }

    let mode: IntersectMode = parse_opt(matches, "mode")?.unwrap_or_default();
    let backend: Backend = parse_opt(matches, "backend")?.unwrap_or_default();
    let chrom_naming: ChromNaming = parse_opt(matches, "chrom-naming")?.unwrap_or_default();

    let strandedness = if matches.get_flag("same-strand") {
        Strandedness::Same
    } else if matches.get_flag("opposite-strand") {
        Strandedness::Opposite
    } else {
        Strandedness::Ignore
    };

    let feature = matches.get_one::<String>("feature").cloned();
    let a_opts = ParseOptions {
        file_type: parse_opt::<FileType>(matches, "a-format")?,
        feature: feature.clone(),
        chrom_naming,
    };
    let b_opts = ParseOptions {
        file_type: parse_opt::<FileType>(matches, "b-format")?,
        feature,
        chrom_naming,
    };

    let (a, b) = load_pair(a_path, &a_opts, b_path, &b_opts)?;

    let opts = IntersectOptions {
        backend,
        strandedness,
    };
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("-");

    let mut writer = get_dynamic_writer(Path::new(output))
        .with_context(|| format!("Failed to open output {}", output))?;

    let records = report(intersect(&a, &b, &opts), mode);
    let n = if matches.get_flag("json") {
        let mut n = 0;
        for record in records {
            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
            n += 1;
        }
        n
    } else {
        write_lines(&mut writer, records)
            .with_context(|| format!("Failed to write output to {}", output))?
    };
    writer
        .finish()
        .with_context(|| format!("Failed to finish output {}", output))?;

    info!("Wrote {} records ({:?} mode)", n, mode);

    Ok(())
}

/// Parse an optional string argument with the target type's `FromStr`.
fn parse_opt<T>(matches: &ArgMatches, id: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(id)
        .map(|s| s.parse::<T>())
        .transpose()
        .with_context(|| format!("Invalid value for --{}", id))
}

fn load_pair(
    a_path: &str,
    a_opts: &ParseOptions,
    b_path: &str,
    b_opts: &ParseOptions,
) -> Result<(RegionSet, RegionSet)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message(format!("Loading {}", a_path));
    let a = read_region_set(Path::new(a_path), a_opts)
        .with_context(|| format!("Failed to load interval file A: {}", a_path))?;

    spinner.set_message(format!("Loading {}", b_path));
    let b = read_region_set(Path::new(b_path), b_opts)
        .with_context(|| format!("Failed to load interval file B: {}", b_path))?;

    spinner.finish_and_clear();
    Ok((a, b))
}
