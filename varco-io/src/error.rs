use std::io;

use thiserror::Error;

/// Error type for varco-io operations.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Can't open or read a table file.
    #[error("Can't read file: {0}")]
    FileRead(String),

    /// A data row carries a non-numeric reference coordinate.
    #[error("Invalid reference coordinate at line {line}: {value:?}")]
    InvalidCoordinate { line: usize, value: String },

    /// The variant-interval table yielded no usable rows.
    #[error("No variant intervals found in table: {0}")]
    EmptyIntervalTable(String),

    /// No alignment files were found in the given directory.
    #[error("No .mbo alignment files found in directory: {0}")]
    NoDatasetsFound(String),

    /// Two alignment files reduce to the same accession once their
    /// extensions are stripped (e.g. `SRR1.mbo` and `SRR1.mbo.gz`).
    #[error("Multiple .mbo files for accession {0}; each dataset must have exactly one")]
    DuplicateAccession(String),

    /// A zygosity report row is missing one of its three columns.
    #[error("Malformed zygosity report row at line {line}")]
    MalformedReport { line: usize },
}

/// Result type alias for varco-io operations.
pub type Result<T> = std::result::Result<T, TableError>;
