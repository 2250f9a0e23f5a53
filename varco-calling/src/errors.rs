use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallingError {
    /// An alignment references a variant that the interval table does not
    /// know. The aligner output and the interval table were built against
    /// different references; the whole run stops rather than silently
    /// skipping.
    #[error("Unknown variant {variant_id:?} in dataset {accession:?}: not present in the interval table")]
    UnknownVariant {
        accession: String,
        variant_id: String,
    },

    #[error(transparent)]
    Table(#[from] varco_io::TableError),
}
