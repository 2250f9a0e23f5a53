use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use varco_core::models::DatasetCalls;
use varco_core::utils::get_dynamic_reader;

use crate::consts::*;
use crate::error::{Result, TableError};

///
/// Write the zygosity report: one row per dataset (sorted by accession),
/// with the heterozygous and homozygous variant lists space-delimited
/// inside their fields. Empty lists render as empty fields.
///
pub fn write_zygosity_report(calls: &HashMap<String, DatasetCalls>, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", REPORT_HEADER)?;

    let mut accessions: Vec<&String> = calls.keys().collect();
    accessions.sort();

    for accession in accessions {
        let dataset_calls = &calls[accession];
        writeln!(
            writer,
            "{}\t{}\t{}",
            accession,
            dataset_calls.heterozygous.join(REPORT_LIST_SEPARATOR),
            dataset_calls.homozygous.join(REPORT_LIST_SEPARATOR),
        )?;
    }

    writer.flush()?;
    Ok(())
}

fn split_variant_list(field: &str) -> Vec<String> {
    field.split_whitespace().map(String::from).collect()
}

///
/// Read a zygosity report back into per-dataset call sets. This is the
/// input of the `graph` subcommand, so a report can be graphed without
/// re-running the calling pipeline.
///
pub fn read_zygosity_report(path: &Path) -> Result<HashMap<String, DatasetCalls>> {
    let reader = get_dynamic_reader(path).map_err(|e| TableError::FileRead(format!("{e:#}")))?;

    let mut calls = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let missing = || TableError::MalformedReport { line: index + 1 };
        let accession = fields.next().ok_or_else(missing)?;
        let heterozygous = split_variant_list(fields.next().ok_or_else(missing)?);
        let homozygous = split_variant_list(fields.next().ok_or_else(missing)?);

        calls.insert(
            accession.to_string(),
            DatasetCalls {
                heterozygous,
                homozygous,
                skipped_records: 0,
            },
        );
    }

    Ok(calls)
}

///
/// Write the co-occurrence graph as a sorted undirected edge list, one
/// `variant_a < variant_b` row per edge.
///
pub fn write_edge_list(edges: &[(String, String, u32)], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", EDGE_LIST_HEADER)?;

    for (variant_a, variant_b, weight) in edges {
        writeln!(writer, "{}\t{}\t{}", variant_a, variant_b, weight)?;
    }

    writer.flush()?;
    Ok(())
}
