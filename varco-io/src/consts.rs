//! Column layout of Magic-BLAST tabular output and report formats.

/// Field index of the query/read identifier in an `.mbo` row.
pub const READ_ID_FIELD: usize = 0;
/// Field index of the variant (subject) identifier.
pub const VARIANT_ID_FIELD: usize = 1;
/// Field index of the reference alignment start.
pub const REF_START_FIELD: usize = 8;
/// Field index of the reference alignment stop.
pub const REF_STOP_FIELD: usize = 9;
/// Field index of the BTOP alignment string.
pub const BTOP_FIELD: usize = 16;
/// Rows with fewer fields than this are not data rows and are skipped.
pub const MBO_FIELD_COUNT: usize = 17;

/// Subject-field value marking a read that did not align.
pub const UNALIGNED_PLACEHOLDER: &str = "-";

/// Extension of Magic-BLAST tabular output files.
pub const MBO_EXTENSION: &str = "mbo";

/// Header row of the zygosity report.
pub const REPORT_HEADER: &str = "sra_accession\theterozygous\thomozygous";
/// Separator between variant ids inside one report field.
pub const REPORT_LIST_SEPARATOR: &str = " ";

/// Header row of the co-occurrence edge list.
pub const EDGE_LIST_HEADER: &str = "variant_a\tvariant_b\tweight";
