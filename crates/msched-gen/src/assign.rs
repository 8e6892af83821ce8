use std::mem;

use log::debug;
use msched_core::errors::{ErrorInfo, MschedError};
use msched_core::WeightVector;

use crate::dimension::Dimension;
use crate::record::ParameterSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Axis {
    len: usize,
    /// Consecutive records holding the same candidate (`n_total / n_block`).
    run: usize,
}

/// Mixed-radix addressing of a Cartesian product table.
///
/// The first axis varies slowest and the last axis fastest. Record `r` holds
/// candidate `(r / run) % len` of each axis, which is the block index of the
/// record modulo the axis size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixLayout {
    total: usize,
    axes: Vec<Axis>,
}

impl RadixLayout {
    /// Builds the layout for axes of the given sizes.
    pub fn new(sizes: &[usize]) -> Result<Self, MschedError> {
        if let Some(axis) = sizes.iter().position(|&len| len == 0) {
            return Err(MschedError::EmptyDimension(
                ErrorInfo::new("empty-axis", "axis has no candidates")
                    .with_context("axis", axis.to_string()),
            ));
        }
        let total = sizes
            .iter()
            .try_fold(1usize, |acc, &len| acc.checked_mul(len))
            .ok_or_else(|| {
                MschedError::CombinatorialOverflow(
                    ErrorInfo::new(
                        "product-overflow",
                        "number of parameter combinations does not fit into usize",
                    )
                    .with_context("sizes", format!("{sizes:?}"))
                    .with_hint("remove dimensions or candidates"),
                )
            })?;

        let mut axes = Vec::with_capacity(sizes.len());
        let mut n_before = 1usize;
        for &len in sizes {
            // n_block divides total: it is a prefix product of the same factors.
            let n_block = n_before * len;
            debug_assert_eq!(total % n_block, 0);
            axes.push(Axis {
                len,
                run: total / n_block,
            });
            n_before = n_block;
        }
        Ok(Self { total, axes })
    }

    /// Number of records in the table.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn num_axes(&self) -> usize {
        self.axes.len()
    }

    /// Candidate index of `axis` held by record `record`.
    pub fn candidate_index(&self, record: usize, axis: usize) -> usize {
        let Axis { len, run } = self.axes[axis];
        (record / run) % len
    }
}

/// Builds the full Cartesian product of `dimensions`.
///
/// Records start from `defaults` for the weight vector; each dimension then
/// stamps its candidate for the record's slot in the mixed-radix layout.
pub fn assign(
    dimensions: &[Dimension],
    defaults: &WeightVector,
) -> Result<Vec<ParameterSet>, MschedError> {
    let sizes: Vec<usize> = dimensions.iter().map(Dimension::len).collect();
    if let Some(empty) = dimensions.iter().find(|d| d.is_empty()) {
        return Err(MschedError::empty_dimension(&empty.label()));
    }
    let layout = RadixLayout::new(&sizes)?;
    debug!(
        "assigning {} dimensions {:?} into {} records",
        dimensions.len(),
        sizes,
        layout.total()
    );

    let mut table = allocate_table(layout.total())?;
    table.extend((0..layout.total()).map(|slot| {
        let mut record = ParameterSet::new(*defaults);
        for (axis, dimension) in dimensions.iter().enumerate() {
            dimension.stamp(&mut record, layout.candidate_index(slot, axis));
        }
        record
    }));
    Ok(table)
}

/// Reserves room for `total` records, failing instead of aborting when the
/// table cannot be held in memory.
fn allocate_table(total: usize) -> Result<Vec<ParameterSet>, MschedError> {
    let too_large = |bytes: Option<usize>| {
        let info = ErrorInfo::new(
            "table-too-large",
            "parameter table does not fit into memory",
        )
        .with_context("records", total.to_string())
        .with_hint("remove candidates or split the catalog");
        match bytes {
            Some(bytes) => info.with_context("bytes", bytes.to_string()),
            None => info,
        }
    };
    let bytes = total
        .checked_mul(mem::size_of::<ParameterSet>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(|| MschedError::CombinatorialOverflow(too_large(None)))?;
    let mut table = Vec::new();
    table
        .try_reserve_exact(total)
        .map_err(|_| MschedError::CombinatorialOverflow(too_large(Some(bytes))))?;
    Ok(table)
}
