use std::collections::HashMap;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use varco_core::models::{DatasetCalls, VariantIntervalMap};
use varco_io::{read_mbo_file, MboFile};

use crate::config::CallingConfig;
use crate::errors::CallingError;
use crate::partition::{merge_maps, partition};
use crate::zygosity::call_dataset;

fn call_partition(
    datasets: Vec<MboFile>,
    intervals: &VariantIntervalMap,
    config: &CallingConfig,
    progress: &ProgressBar,
) -> Result<HashMap<String, DatasetCalls>, CallingError> {
    let mut results = HashMap::new();
    for dataset in datasets {
        let records = read_mbo_file(&dataset.path)?;
        let calls = call_dataset(&dataset.accession, &records, intervals, config)?;
        results.insert(dataset.accession, calls);
        progress.inc(1);
    }
    Ok(results)
}

///
/// Call every dataset, fanning the work out across at most `threads`
/// workers.
///
/// Datasets are split into `min(threads, dataset count)` contiguous
/// partitions; each worker owns its partition outright (it loads, tests
/// and calls its datasets with no shared mutable state) and produces a
/// private partial map. Workers are joined before the partial maps are
/// merged, and accessions are unique across partitions, so the merged
/// result is identical for any worker count.
///
/// The first fatal error (an unknown variant, an unreadable file) aborts
/// the whole run; no partial result escapes.
///
pub fn call_datasets(
    datasets: Vec<MboFile>,
    intervals: &VariantIntervalMap,
    config: &CallingConfig,
    threads: usize,
) -> Result<HashMap<String, DatasetCalls>> {
    let part_count = threads.min(datasets.len()).max(1);

    let progress = ProgressBar::new(datasets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} datasets ({eta})")?
            .progress_chars("##-"),
    );

    let partials: Vec<HashMap<String, DatasetCalls>> = partition(datasets, part_count)
        .into_par_iter()
        .map(|part| call_partition(part, intervals, config, &progress))
        .collect::<Result<Vec<_>, CallingError>>()?;

    progress.finish_and_clear();

    Ok(merge_maps(partials))
}
