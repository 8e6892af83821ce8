use chrono::NaiveDateTime;
use msched_core::errors::MschedError;
use msched_core::WeightVector;

use crate::catalog::{format_start, NumericTarget, ParameterCatalog};
use crate::fields::{FlagField, ScalarField, ScopedField};
use crate::groups::GroupTable;
use crate::record::ParameterSet;
use crate::weights::expand_weight_factors;

/// Candidates of a flag dimension, in enumeration order.
pub const FLAG_CANDIDATES: [bool; 2] = [false, true];

/// One axis of variability with its ordered candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Start(Vec<NaiveDateTime>),
    Weights(Vec<WeightVector>),
    Flag(FlagField),
    Scalar {
        field: ScalarField,
        values: Vec<f64>,
    },
    Scoped {
        field: ScopedField,
        member: String,
        /// Entity keys the member token resolved to.
        keys: Vec<String>,
        values: Vec<f64>,
    },
}

impl Dimension {
    pub fn label(&self) -> String {
        match self {
            Dimension::Start(_) => "start".to_string(),
            Dimension::Weights(_) => "weightFactors".to_string(),
            Dimension::Flag(field) => field.name().to_string(),
            Dimension::Scalar { field, .. } => field.name().to_string(),
            Dimension::Scoped { field, member, .. } => format!("{}[{}]", field.name(), member),
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        match self {
            Dimension::Start(values) => values.len(),
            Dimension::Weights(values) => values.len(),
            Dimension::Flag(_) => FLAG_CANDIDATES.len(),
            Dimension::Scalar { values, .. } | Dimension::Scoped { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes candidate `index` of this dimension into `record`.
    pub fn stamp(&self, record: &mut ParameterSet, index: usize) {
        match self {
            Dimension::Start(values) => record.start = Some(values[index]),
            Dimension::Weights(values) => record.weights = values[index],
            Dimension::Flag(field) => {
                record.flags.insert(*field, FLAG_CANDIDATES[index]);
            }
            Dimension::Scalar { field, values } => {
                record.scalars.insert(*field, values[index]);
            }
            Dimension::Scoped {
                field,
                keys,
                values,
                ..
            } => record.set_override(*field, keys, values[index]),
        }
    }

    /// Human readable candidate list, used by the `count` report.
    pub fn describe_candidates(&self) -> Vec<String> {
        match self {
            Dimension::Start(values) => values.iter().map(format_start).collect(),
            Dimension::Weights(values) => values
                .iter()
                .map(|w| format!("{:?}", w.components()))
                .collect(),
            Dimension::Flag(_) => FLAG_CANDIDATES.iter().map(|b| b.to_string()).collect(),
            Dimension::Scalar { values, .. } | Dimension::Scoped { values, .. } => {
                values.iter().map(|v| v.to_string()).collect()
            }
        }
    }
}

/// Lists the catalog's dimensions in enumeration precedence order.
///
/// Order: start, composite weights, flags, scalar numerics, scoped numerics;
/// within each group the declaration order is kept.
pub fn build_dimensions(
    catalog: &ParameterCatalog,
    groups: &GroupTable,
    defaults: &WeightVector,
) -> Result<Vec<Dimension>, MschedError> {
    let mut dimensions = Vec::new();
    if !catalog.start().is_empty() {
        dimensions.push(Dimension::Start(catalog.start().to_vec()));
    }
    if let Some(weights) = expand_weight_factors(catalog.numeric(), defaults)? {
        dimensions.push(Dimension::Weights(weights));
    }
    dimensions.extend(catalog.flags().iter().copied().map(Dimension::Flag));
    for parameter in catalog.numeric() {
        if let NumericTarget::Scalar(field) = parameter.target {
            dimensions.push(Dimension::Scalar {
                field,
                values: parameter.values.clone(),
            });
        }
    }
    for parameter in catalog.scoped() {
        dimensions.push(Dimension::Scoped {
            field: parameter.field,
            member: parameter.member.clone(),
            keys: groups.resolve(parameter.field.entity(), &parameter.member),
            values: parameter.values.clone(),
        });
    }
    Ok(dimensions)
}
