use std::fmt::{self, Display};

///
/// One Magic-BLAST alignment of a sequencing read against a variant
/// flanking sequence, as parsed from a single row of tabular output.
///
/// Coordinates are 0-based offsets into the ungapped reference (flanking)
/// sequence. The constructor normalizes reversed spans so that
/// `ref_start <= ref_stop` always holds.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub read_id: String,
    pub variant_id: String,
    pub ref_start: u64,
    pub ref_stop: u64,
    pub btop: String,
}

impl AlignmentRecord {
    pub fn new(
        read_id: String,
        variant_id: String,
        ref_start: u64,
        ref_stop: u64,
        btop: String,
    ) -> Self {
        // minus-strand alignments report the span reversed
        let (ref_start, ref_stop) = if ref_start > ref_stop {
            (ref_stop, ref_start)
        } else {
            (ref_start, ref_stop)
        };

        AlignmentRecord {
            read_id,
            variant_id,
            ref_start,
            ref_stop,
            btop,
        }
    }

    /// Whether the aligned reference span fully contains `[start, stop]`.
    pub fn span_contains(&self, start: u64, stop: u64) -> bool {
        self.ref_start <= start && stop <= self.ref_stop
    }
}

impl Display for AlignmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.read_id, self.variant_id, self.ref_start, self.ref_stop, self.btop
        )
    }
}
