/// Variant fraction above which a call is homozygous.
pub const DEFAULT_HOMOZYGOUS_THRESHOLD: f64 = 0.8;
/// Variant fraction above which a call is heterozygous.
pub const DEFAULT_HETEROZYGOUS_THRESHOLD: f64 = 0.3;

pub const DEFAULT_THREAD_COUNT: usize = 4;

pub fn get_thread_count(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_THREAD_COUNT)
}
