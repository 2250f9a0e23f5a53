use std::ffi::OsStr;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use varco_core::models::AlignmentRecord;
use varco_core::utils::{get_dynamic_reader, remove_all_extensions};

use crate::consts::*;
use crate::error::{Result, TableError};

///
/// One SRA dataset's alignment file: the accession (derived from the file
/// name with all extensions stripped) and the path to its `.mbo` output.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MboFile {
    pub accession: String,
    pub path: PathBuf,
}

fn is_mbo_file(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) if ext == MBO_EXTENSION => true,
        // also accept gzip'd output: SRR123.mbo.gz
        Some("gz") => path
            .file_stem()
            .map(Path::new)
            .and_then(|stem| stem.extension())
            == Some(OsStr::new(MBO_EXTENSION)),
        _ => false,
    }
}

///
/// Find every `.mbo` (or `.mbo.gz`) file in a directory, one per SRA
/// dataset, sorted by accession so downstream work is deterministic.
///
/// An empty directory is an error: a calling run with no datasets is a
/// misconfiguration, not an empty result. So are two files that strip to
/// the same accession (say `SRR1.mbo` next to `SRR1.mbo.gz`): each
/// dataset must map to exactly one file, or downstream merging would see
/// the same key twice.
///
pub fn discover_mbo_files(directory: &Path) -> Result<Vec<MboFile>> {
    let entries = fs::read_dir(directory)?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if is_mbo_file(&path) {
            files.push(MboFile {
                accession: remove_all_extensions(&path),
                path,
            });
        }
    }

    if files.is_empty() {
        return Err(TableError::NoDatasetsFound(directory.display().to_string()));
    }

    files.sort_by(|a, b| a.accession.cmp(&b.accession));
    if let Some(pair) = files.windows(2).find(|w| w[0].accession == w[1].accession) {
        return Err(TableError::DuplicateAccession(pair[0].accession.clone()));
    }
    Ok(files)
}

fn parse_coordinate(value: &str, line: usize) -> Result<u64> {
    value.parse().map_err(|_| TableError::InvalidCoordinate {
        line,
        value: value.to_string(),
    })
}

///
/// Read one Magic-BLAST tabular output file into alignment records.
///
/// Skipped without error: `#` comment rows, rows with fewer than 17
/// fields (headers, diagnostics), and rows whose subject field is the
/// unaligned placeholder. Reversed reference spans are normalized by
/// [`AlignmentRecord::new`]. A non-numeric coordinate in an otherwise
/// well-shaped row means the table is corrupt and is an error.
///
pub fn read_mbo_file(path: &Path) -> Result<Vec<AlignmentRecord>> {
    let reader = get_dynamic_reader(path).map_err(|e| TableError::FileRead(format!("{e:#}")))?;

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MBO_FIELD_COUNT {
            continue;
        }
        if tokens[VARIANT_ID_FIELD] == UNALIGNED_PLACEHOLDER {
            continue;
        }

        let ref_start = parse_coordinate(tokens[REF_START_FIELD], index + 1)?;
        let ref_stop = parse_coordinate(tokens[REF_STOP_FIELD], index + 1)?;

        records.push(AlignmentRecord::new(
            tokens[READ_ID_FIELD].to_string(),
            tokens[VARIANT_ID_FIELD].to_string(),
            ref_start,
            ref_stop,
            tokens[BTOP_FIELD].to_string(),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn mbo_row(read: &str, variant: &str, start: u64, stop: u64, btop: &str) -> String {
        // 17 whitespace-separated fields with the positions varco reads
        format!(
            "{read}\t{variant}\t100.0\t20\t0\t0\t0\t19\t{start}\t{stop}\t1e-9\t39.2\tplus\t1\t20\t150\t{btop}"
        )
    }

    #[fixture]
    fn mbo_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        let mut file = std::fs::File::create(dir.path().join("SRR1042041.mbo")).unwrap();
        writeln!(file, "# MAGICBLAST 1.4.0").unwrap();
        writeln!(file, "# 3 hits found").unwrap();
        writeln!(file, "{}", mbo_row("read1", "rs111", 0, 19, "4C-CG_10_4")).unwrap();
        writeln!(file, "{}", mbo_row("read2", "rs111", 19, 0, "20")).unwrap();
        writeln!(file, "{}", mbo_row("read3", "-", 0, 19, "20")).unwrap();
        writeln!(file, "short row").unwrap();

        dir
    }

    #[rstest]
    fn test_read_mbo_file_skips_non_data_rows(mbo_dir: TempDir) {
        let records = read_mbo_file(&mbo_dir.path().join("SRR1042041.mbo")).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].read_id, "read1");
        assert_eq!(records[0].btop, "4C-CG_10_4");
    }

    #[rstest]
    fn test_read_mbo_file_normalizes_reversed_spans(mbo_dir: TempDir) {
        let records = read_mbo_file(&mbo_dir.path().join("SRR1042041.mbo")).unwrap();

        assert_eq!(records[1].ref_start, 0);
        assert_eq!(records[1].ref_stop, 19);
    }

    #[test]
    fn test_read_mbo_file_rejects_corrupt_coordinates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.mbo");
        let row = "read1\trs111\t100.0\t20\t0\t0\t0\t19\tx\t19\t1e-9\t39.2\tplus\t1\t20\t150\t20";
        std::fs::write(&path, row).unwrap();

        let err = read_mbo_file(&path).unwrap_err();
        assert!(matches!(err, TableError::InvalidCoordinate { line: 1, .. }));
    }

    #[rstest]
    fn test_discover_mbo_files(mbo_dir: TempDir) {
        std::fs::write(mbo_dir.path().join("SRR1042040.mbo"), "").unwrap();
        std::fs::write(mbo_dir.path().join("notes.txt"), "").unwrap();

        let files = discover_mbo_files(mbo_dir.path()).unwrap();

        let accessions: Vec<&str> = files.iter().map(|f| f.accession.as_str()).collect();
        assert_eq!(accessions, vec!["SRR1042040", "SRR1042041"]);
    }

    #[rstest]
    #[case("SRR1042041.mbo.gz")]
    #[case("SRR1042041.data.mbo")]
    fn test_discover_mbo_files_rejects_duplicate_accessions(
        mbo_dir: TempDir,
        #[case] twin: &str,
    ) {
        std::fs::write(mbo_dir.path().join(twin), "").unwrap();

        assert!(matches!(
            discover_mbo_files(mbo_dir.path()),
            Err(TableError::DuplicateAccession(accession)) if accession == "SRR1042041"
        ));
    }

    #[test]
    fn test_discover_mbo_files_empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            discover_mbo_files(dir.path()),
            Err(TableError::NoDatasetsFound(_))
        ));
    }
}
