use log::debug;
use msched_core::errors::{ErrorInfo, MschedError};
use msched_core::{WeightComponent, WeightVector};

use crate::catalog::{NumericParameter, NumericTarget};

/// Component-wise tolerance under which two normalized vectors are equal.
pub const DEDUP_TOLERANCE: f64 = 1e-10;

/// Folds the declared weight factors into one composite candidate list.
///
/// Components without a declaration contribute the matching component of
/// `defaults` as their only candidate. Returns `Ok(None)` when no weight factor
/// is declared at all, in which case every record keeps `defaults`.
pub fn expand_weight_factors(
    numeric: &[NumericParameter],
    defaults: &WeightVector,
) -> Result<Option<Vec<WeightVector>>, MschedError> {
    let mut candidates: [Vec<f64>; 8] = defaults.components().map(|c| vec![c]);
    let mut declared = false;
    for parameter in numeric {
        if let NumericTarget::Weight(component) = parameter.target {
            if parameter.values.is_empty() {
                return Err(MschedError::empty_dimension(component.name()));
            }
            candidates[component.index()] = parameter.values.clone();
            declared = true;
        }
    }
    if !declared {
        return Ok(None);
    }

    let raw_count = candidates
        .iter()
        .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))
        .ok_or_else(|| {
            MschedError::CombinatorialOverflow(ErrorInfo::new(
                "weight-overflow",
                "weight factor cross product does not fit into usize",
            ))
        })?;

    let mut kept: Vec<WeightVector> = Vec::new();
    let mut zero_sum = 0usize;
    let mut duplicates = 0usize;
    let mut cursor = [0usize; 8];
    for _ in 0..raw_count {
        let raw = WeightVector::from_components(std::array::from_fn(|i| candidates[i][cursor[i]]));
        match raw.normalized() {
            None => zero_sum += 1,
            Some(vector) => {
                if kept.iter().any(|k| k.approx_eq(&vector, DEDUP_TOLERANCE)) {
                    duplicates += 1;
                } else {
                    kept.push(vector);
                }
            }
        }
        advance(&mut cursor, &candidates);
    }
    debug!(
        "weight factors: {} raw combinations, {} all-zero dropped, {} duplicates removed, {} kept",
        raw_count,
        zero_sum,
        duplicates,
        kept.len()
    );

    if kept.is_empty() {
        return Err(MschedError::EmptyDimension(
            ErrorInfo::new(
                "empty-weight-dimension",
                "every weight factor combination sums to zero",
            )
            .with_context("components", WeightComponent::ALL.len().to_string())
            .with_hint("declare at least one non-zero weight factor candidate"),
        ));
    }
    Ok(Some(kept))
}

/// Steps the odometer with the last component varying fastest.
fn advance(cursor: &mut [usize; 8], candidates: &[Vec<f64>; 8]) {
    for idx in (0..cursor.len()).rev() {
        cursor[idx] += 1;
        if cursor[idx] < candidates[idx].len() {
            return;
        }
        cursor[idx] = 0;
    }
}
