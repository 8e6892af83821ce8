//! Multi-scheduling parameter space generation.
//!
//! A [`ParameterCatalog`] declares tunable dimensions. [`generate`] folds the
//! weight factors into one composite dimension, builds the Cartesian product
//! of all dimensions with group fan-out for scoped overrides, and bounds the
//! result with a seeded shuffle.

pub mod assign;
pub mod catalog;
mod codec;
pub mod dimension;
pub mod fields;
mod groups;
mod hash;
mod plan;
mod record;
mod sample;
pub mod tree;
mod weights;

pub use assign::{assign, RadixLayout};
pub use catalog::{
    format_start, parse_start, CatalogFile, NumericParameter, NumericTarget, ParameterCatalog,
    ScopedParameter, START_FORMAT,
};
pub use dimension::{build_dimensions, Dimension, FLAG_CANDIDATES};
pub use fields::{lookup, FlagField, ParameterField, ScalarField, ScopedField, ValueKind};
pub use groups::GroupTable;
pub use hash::stable_hash_string;
pub use plan::{
    count_combinations, generate, plan_runs, summarize, DimensionSummary, GenerateOptions,
    MultiSchedConfig, RunJob, RunPlan, SpaceSummary,
};
pub use record::{EntityOverrides, OverrideValue, ParameterSet};
pub use sample::{check_sample_size, sample};
pub use codec::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
pub use tree::{catalog_from_tree, catalog_to_tree, ConfigEntry, ConfigTree};
pub use weights::{expand_weight_factors, DEDUP_TOLERANCE};

pub use msched_core::{EntityKind, MschedError, WeightComponent, WeightVector};
