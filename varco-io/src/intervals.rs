use std::io::BufRead;
use std::path::Path;

use varco_core::models::{VariantInterval, VariantIntervalMap};
use varco_core::utils::get_dynamic_reader;

use crate::error::{Result, TableError};

///
/// Load the variant-interval table: one row per variant, four
/// whitespace-separated columns (variant id, start, stop, reference-allele
/// length, all decimal).
///
/// Rows that are not four parseable columns are skipped; the table often
/// carries stray headers or footers from the tools that produce it. An
/// empty result is an error, since every later lookup would be fatal.
///
pub fn read_interval_table(path: &Path) -> Result<VariantIntervalMap> {
    let reader = get_dynamic_reader(path).map_err(|e| TableError::FileRead(format!("{e:#}")))?;

    let mut map = VariantIntervalMap::new();
    for line in reader.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 4 {
            continue;
        }

        match (
            tokens[1].parse::<u64>(),
            tokens[2].parse::<u64>(),
            tokens[3].parse::<u64>(),
        ) {
            (Ok(start), Ok(stop), Ok(allele_len)) => {
                map.insert(
                    tokens[0].to_string(),
                    VariantInterval {
                        start,
                        stop,
                        allele_len,
                    },
                );
            }
            _ => continue,
        }
    }

    if map.is_empty() {
        return Err(TableError::EmptyIntervalTable(path.display().to_string()));
    }

    Ok(map)
}
