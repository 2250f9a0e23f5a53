use varco_btop::consts::MATCH_SYMBOL;
use varco_btop::{decode, translate, BtopError};
use varco_core::models::{AlignmentRecord, VariantInterval};

///
/// What one read says about one variant.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// The read's reference span contains the whole variant interval;
    /// `true` means every position in the interval matched the reference
    /// (the read supports the reference allele), `false` means the read
    /// carries at least one substitution inside it.
    Covered(bool),
    /// The read does not span the interval. It is no evidence either way
    /// and must be excluded from tallies.
    Uncovered,
}

///
/// Decide whether a read supports the reference allele across a variant
/// interval.
///
/// The interval boundaries are given in ungapped reference coordinates;
/// they are localized to the read's alignment, translated into track
/// positions, and the reference track is scanned between them for any
/// non-match symbol.
///
pub fn supports_reference(
    record: &AlignmentRecord,
    interval: &VariantInterval,
) -> Result<Containment, BtopError> {
    if !record.span_contains(interval.start, interval.stop) {
        return Ok(Containment::Uncovered);
    }

    // interval boundaries relative to this read's local alignment
    let local_start = (interval.start - record.ref_start) as usize;
    let local_stop = (interval.stop - record.ref_start) as usize;

    let tracks = decode(&record.btop)?;
    let track = tracks.reference.as_bytes();

    let scan_start = translate(local_start, &tracks.reference).saturating_sub(1);
    let scan_stop = tracks.len() - translate(local_stop, &tracks.reference);

    for position in scan_start..scan_stop {
        if track[position] != MATCH_SYMBOL as u8 {
            return Ok(Containment::Covered(false));
        }
    }

    Ok(Containment::Covered(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn record(ref_start: u64, ref_stop: u64, btop: &str) -> AlignmentRecord {
        AlignmentRecord::new(
            "read1".to_string(),
            "rs111".to_string(),
            ref_start,
            ref_stop,
            btop.to_string(),
        )
    }

    fn interval(start: u64, stop: u64) -> VariantInterval {
        VariantInterval {
            start,
            stop,
            allele_len: 1,
        }
    }

    #[rstest]
    // the variant interval sits in the matching tail of the alignment
    #[case(interval(16, 17), Containment::Covered(true))]
    // the interval overlaps the substituted/gapped middle
    #[case(interval(5, 6), Containment::Covered(false))]
    fn test_containment_against_decoded_track(
        #[case] interval: VariantInterval,
        #[case] expected: Containment,
    ) {
        let record = record(0, 19, "4C-CG_10_4");
        assert_eq!(supports_reference(&record, &interval).unwrap(), expected);
    }

    #[test]
    fn test_read_not_spanning_the_interval_is_uncovered() {
        let starts_past = record(8, 19, "12");
        assert_eq!(
            supports_reference(&starts_past, &interval(5, 6)).unwrap(),
            Containment::Uncovered
        );

        let stops_short = record(0, 15, "16");
        assert_eq!(
            supports_reference(&stops_short, &interval(16, 17)).unwrap(),
            Containment::Uncovered
        );
    }

    #[test]
    fn test_all_match_alignment_supports_reference() {
        let record = record(0, 19, "20");
        assert_eq!(
            supports_reference(&record, &interval(5, 6)).unwrap(),
            Containment::Covered(true)
        );
    }

    #[test]
    fn test_malformed_encoding_propagates() {
        let record = record(0, 19, "_10");
        assert!(supports_reference(&record, &interval(5, 6)).is_err());
    }
}
