pub mod alignment;
pub mod call;
pub mod interval;

// re-export for cleaner imports
pub use self::alignment::AlignmentRecord;
pub use self::call::{DatasetCalls, Tally, ZygosityCall};
pub use self::interval::{VariantInterval, VariantIntervalMap};
