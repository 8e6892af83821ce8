use log::debug;
use msched_core::errors::{ErrorInfo, MschedError};
use msched_core::RngHandle;
use rand::seq::SliceRandom;

/// Bounds `table` to at most `max_size` entries.
///
/// Tables that already fit are returned untouched. Larger tables are shuffled
/// with a generator seeded from `seed` and truncated, so equal inputs always
/// give equal outputs.
pub fn sample<T>(mut table: Vec<T>, max_size: usize, seed: u64) -> Result<Vec<T>, MschedError> {
    check_sample_size(max_size)?;
    if table.len() <= max_size {
        return Ok(table);
    }
    debug!(
        "sampling {} of {} records with seed {}",
        max_size,
        table.len(),
        seed
    );
    let mut rng = RngHandle::from_seed(seed);
    table.shuffle(&mut rng);
    table.truncate(max_size);
    Ok(table)
}

/// Rejects a maximum output size of zero.
pub fn check_sample_size(max_size: usize) -> Result<(), MschedError> {
    if max_size == 0 {
        return Err(MschedError::InvalidSampleSize(
            ErrorInfo::new("sample-size-zero", "maximum output size must be positive")
                .with_context("max_size", max_size.to_string()),
        ));
    }
    Ok(())
}
