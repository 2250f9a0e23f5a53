use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use varco_calling::consts::get_thread_count;
use varco_calling::{call_datasets, CallingConfig};
use varco_io::{discover_mbo_files, read_interval_table, write_zygosity_report};

pub fn run_call(matches: &ArgMatches) -> Result<()> {
    let mbo_dir = matches
        .get_one::<String>("mbo-dir")
        .expect("A directory of .mbo files is required.");

    let intervals_path = matches
        .get_one::<String>("intervals")
        .expect("A variant-interval table is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let threads = get_thread_count(matches.get_one::<usize>("threads").copied());

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => CallingConfig::from_yaml_file(Path::new(path))?,
        None => CallingConfig::default(),
    };
    if let Some(threshold) = matches.get_one::<f64>("hom-threshold") {
        config.homozygous_threshold = *threshold;
    }
    if let Some(threshold) = matches.get_one::<f64>("het-threshold") {
        config.heterozygous_threshold = *threshold;
    }

    let datasets = discover_mbo_files(Path::new(mbo_dir))?;
    let intervals = read_interval_table(Path::new(intervals_path))?;

    println!(
        "Calling {} datasets against {} variant intervals on {} threads",
        datasets.len(),
        intervals.len(),
        threads
    );

    let calls = call_datasets(datasets, &intervals, &config, threads)?;

    let skipped: u64 = calls.values().map(|c| c.skipped_records).sum();
    if skipped > 0 {
        eprintln!("Warning: skipped {skipped} records with malformed alignment encodings");
    }

    // written only after the whole run succeeded; a fatal error above
    // leaves no partial report behind
    write_zygosity_report(&calls, Path::new(output))?;
    println!("Wrote zygosity report to {output}");

    Ok(())
}
