///
/// Read-evidence counts for one (dataset, variant) pair.
///
/// `supporting` counts reads that match the reference allele across the
/// whole variant interval; `non_supporting` counts reads carrying at
/// least one substitution inside it. Reads that do not cover the interval
/// are excluded from both counts.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub supporting: u64,
    pub non_supporting: u64,
}

impl Tally {
    pub fn new(supporting: u64, non_supporting: u64) -> Self {
        Tally {
            supporting,
            non_supporting,
        }
    }

    pub fn observe(&mut self, supports_reference: bool) {
        if supports_reference {
            self.supporting += 1;
        } else {
            self.non_supporting += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.supporting + self.non_supporting
    }

    /// Fraction of covering reads that carry the variant allele.
    ///
    /// `None` when there is no evidence either way; that case maps to
    /// [`ZygosityCall::Absent`], never to a division error.
    pub fn variant_fraction(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(self.non_supporting as f64 / total as f64)
        }
    }
}

/// Discrete zygosity call for one (dataset, variant) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZygosityCall {
    Absent,
    Heterozygous,
    Homozygous,
}

///
/// The variants called in one SRA dataset, split by zygosity.
///
/// Only non-absent calls are kept; both lists are sorted so output is
/// deterministic regardless of how the work was partitioned.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetCalls {
    pub heterozygous: Vec<String>,
    pub homozygous: Vec<String>,
    /// Records whose alignment encoding could not be decoded. They are
    /// excluded from evidence, not fatal; surfaced in run summaries.
    pub skipped_records: u64,
}

impl DatasetCalls {
    /// All called variant identifiers, zygosity ignored.
    pub fn called_variants(&self) -> impl Iterator<Item = &String> {
        self.heterozygous.iter().chain(self.homozygous.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.heterozygous.is_empty() && self.homozygous.is_empty()
    }
}
