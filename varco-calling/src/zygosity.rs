use std::collections::HashMap;

use varco_core::models::{AlignmentRecord, DatasetCalls, Tally, VariantIntervalMap, ZygosityCall};

use crate::config::CallingConfig;
use crate::containment::{supports_reference, Containment};
use crate::errors::CallingError;

///
/// Collapse a tally into a discrete zygosity call.
///
/// The variant fraction is the share of covering reads that carry the
/// variant allele. Both comparisons are strict: a fraction exactly at the
/// heterozygous threshold is absent, exactly at the homozygous threshold
/// heterozygous. No evidence at all is the defined absent case.
///
pub fn call_zygosity(tally: &Tally, config: &CallingConfig) -> ZygosityCall {
    match tally.variant_fraction() {
        None => ZygosityCall::Absent,
        Some(fraction) if fraction > config.homozygous_threshold => ZygosityCall::Homozygous,
        Some(fraction) if fraction > config.heterozygous_threshold => ZygosityCall::Heterozygous,
        Some(_) => ZygosityCall::Absent,
    }
}

///
/// Call every variant in one SRA dataset.
///
/// Each record is tested against its variant's interval; covering reads
/// accumulate into per-variant tallies, uncovered reads are dropped, and
/// records whose BTOP string cannot be decoded fail individually (counted
/// in `skipped_records`, never fatal). A record naming a variant missing
/// from the interval table aborts the run: the inputs disagree about the
/// reference build.
///
pub fn call_dataset(
    accession: &str,
    records: &[AlignmentRecord],
    intervals: &VariantIntervalMap,
    config: &CallingConfig,
) -> Result<DatasetCalls, CallingError> {
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    let mut skipped_records = 0;

    for record in records {
        let interval =
            intervals
                .get(&record.variant_id)
                .ok_or_else(|| CallingError::UnknownVariant {
                    accession: accession.to_string(),
                    variant_id: record.variant_id.clone(),
                })?;

        match supports_reference(record, interval) {
            Ok(Containment::Covered(supports)) => {
                tallies
                    .entry(record.variant_id.as_str())
                    .or_default()
                    .observe(supports);
            }
            Ok(Containment::Uncovered) => {}
            Err(_) => skipped_records += 1,
        }
    }

    let mut calls = DatasetCalls {
        skipped_records,
        ..DatasetCalls::default()
    };

    for (variant_id, tally) in &tallies {
        match call_zygosity(tally, config) {
            ZygosityCall::Homozygous => calls.homozygous.push((*variant_id).to_string()),
            ZygosityCall::Heterozygous => calls.heterozygous.push((*variant_id).to_string()),
            ZygosityCall::Absent => {}
        }
    }

    calls.heterozygous.sort();
    calls.homozygous.sort();
    Ok(calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use varco_core::models::VariantInterval;

    #[rstest]
    #[case(Tally::new(0, 9), ZygosityCall::Homozygous)]
    #[case(Tally::new(1, 9), ZygosityCall::Homozygous)]
    // fraction exactly 0.8: strictly above the het threshold only
    #[case(Tally::new(2, 8), ZygosityCall::Heterozygous)]
    #[case(Tally::new(5, 5), ZygosityCall::Heterozygous)]
    // fraction exactly 0.3: not strictly above, so absent
    #[case(Tally::new(7, 3), ZygosityCall::Absent)]
    #[case(Tally::new(9, 1), ZygosityCall::Absent)]
    #[case(Tally::new(0, 0), ZygosityCall::Absent)]
    fn test_call_zygosity_thresholds(#[case] tally: Tally, #[case] expected: ZygosityCall) {
        assert_eq!(call_zygosity(&tally, &CallingConfig::default()), expected);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let config = CallingConfig {
            homozygous_threshold: 0.4,
            heterozygous_threshold: 0.1,
        };
        assert_eq!(
            call_zygosity(&Tally::new(5, 5), &config),
            ZygosityCall::Homozygous
        );
    }

    fn record(variant_id: &str, ref_start: u64, ref_stop: u64, btop: &str) -> AlignmentRecord {
        AlignmentRecord::new(
            "read".to_string(),
            variant_id.to_string(),
            ref_start,
            ref_stop,
            btop.to_string(),
        )
    }

    #[fixture]
    fn intervals() -> VariantIntervalMap {
        vec![(
            "rs222".to_string(),
            VariantInterval {
                start: 5,
                stop: 6,
                allele_len: 1,
            },
        )]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn test_call_dataset_aggregates_read_evidence(intervals: VariantIntervalMap) {
        // nine variant-carrying reads, one uncovered, one malformed
        let mut records: Vec<AlignmentRecord> = (0..9)
            .map(|_| record("rs222", 0, 19, "4C-CG_10_4"))
            .collect();
        records.push(record("rs222", 8, 19, "12"));
        records.push(record("rs222", 0, 19, "_10"));

        let calls =
            call_dataset("SRR1", &records, &intervals, &CallingConfig::default()).unwrap();

        assert_eq!(calls.homozygous, vec!["rs222".to_string()]);
        assert_eq!(calls.heterozygous, Vec::<String>::new());
        assert_eq!(calls.skipped_records, 1);
    }

    #[rstest]
    fn test_call_dataset_unknown_variant_is_fatal(intervals: VariantIntervalMap) {
        let records = vec![record("rs999", 0, 19, "20")];

        let err =
            call_dataset("SRR1", &records, &intervals, &CallingConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            CallingError::UnknownVariant { ref variant_id, .. } if variant_id == "rs999"
        ));
    }
}
