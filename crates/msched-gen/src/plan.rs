use log::info;
use msched_core::errors::MschedError;
use msched_core::{derive_substream_seed, WeightVector};
use serde::{Deserialize, Serialize};

use crate::assign::{assign, RadixLayout};
use crate::catalog::ParameterCatalog;
use crate::dimension::{build_dimensions, Dimension};
use crate::groups::GroupTable;
use crate::hash::stable_hash_string;
use crate::record::ParameterSet;
use crate::sample::{check_sample_size, sample};

/// Sampling bounds and ambient defaults of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateOptions {
    /// Maximum number of parameter sets handed to the scheduler.
    pub max_size: usize,
    /// Seed of the sampling shuffle.
    pub seed: u64,
    /// Weights used for components that are not declared in the catalog.
    #[serde(default)]
    pub default_weights: WeightVector,
}

impl GenerateOptions {
    pub fn new(max_size: usize, seed: u64) -> Self {
        Self {
            max_size,
            seed,
            default_weights: WeightVector::default(),
        }
    }
}

/// Catalog, groups and options read from a single configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultiSchedConfig {
    pub catalog: ParameterCatalog,
    #[serde(default)]
    pub groups: GroupTable,
    pub options: GenerateOptions,
}

/// Size of every dimension and of the full product, before sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceSummary {
    pub dimensions: Vec<DimensionSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    pub label: String,
    pub candidates: Vec<String>,
}

fn dimensions_for(
    catalog: &ParameterCatalog,
    groups: &GroupTable,
    options: &GenerateOptions,
) -> Result<Vec<Dimension>, MschedError> {
    build_dimensions(catalog, groups, &options.default_weights)
}

/// Describes the parameter space without materializing the table.
pub fn summarize(
    catalog: &ParameterCatalog,
    groups: &GroupTable,
    options: &GenerateOptions,
) -> Result<SpaceSummary, MschedError> {
    let dimensions = dimensions_for(catalog, groups, options)?;
    let sizes: Vec<usize> = dimensions.iter().map(Dimension::len).collect();
    let layout = RadixLayout::new(&sizes)?;
    Ok(SpaceSummary {
        dimensions: dimensions
            .iter()
            .map(|d| DimensionSummary {
                label: d.label(),
                candidates: d.describe_candidates(),
            })
            .collect(),
        total: layout.total(),
    })
}

/// Number of parameter sets before sampling.
pub fn count_combinations(
    catalog: &ParameterCatalog,
    options: &GenerateOptions,
) -> Result<usize, MschedError> {
    // Group membership does not change dimension sizes.
    summarize(catalog, &GroupTable::default(), options).map(|summary| summary.total)
}

/// Produces the (possibly sampled) parameter sets for a catalog.
pub fn generate(
    catalog: &ParameterCatalog,
    groups: &GroupTable,
    options: &GenerateOptions,
) -> Result<Vec<ParameterSet>, MschedError> {
    check_sample_size(options.max_size)?;
    let dimensions = dimensions_for(catalog, groups, options)?;
    let table = assign(&dimensions, &options.default_weights)?;
    let total = table.len();
    let sampled = sample(table, options.max_size, options.seed)?;
    info!(
        "generated {} parameter sets from {} combinations over {} dimensions",
        sampled.len(),
        total,
        dimensions.len()
    );
    Ok(sampled)
}

/// One scheduling run derived from a parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunJob {
    pub id: usize,
    pub seed: u64,
    pub out_dir: String,
    pub params: ParameterSet,
}

/// Reproducible set of scheduling runs for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    pub plan_hash: String,
    pub seed: u64,
    pub total_combinations: usize,
    pub jobs: Vec<RunJob>,
}

/// Generates the parameter sets and wraps each into an independent job.
pub fn plan_runs(config: &MultiSchedConfig) -> Result<RunPlan, MschedError> {
    let plan_hash = stable_hash_string(config)?;
    let options = &config.options;
    let total_combinations = count_combinations(&config.catalog, options)?;
    let params = generate(&config.catalog, &config.groups, options)?;
    let jobs = params
        .into_iter()
        .enumerate()
        .map(|(idx, params)| RunJob {
            id: idx,
            seed: derive_substream_seed(options.seed, idx as u64),
            out_dir: format!("job_{:04}", idx),
            params,
        })
        .collect();
    Ok(RunPlan {
        plan_hash,
        seed: options.seed,
        total_combinations,
        jobs,
    })
}
