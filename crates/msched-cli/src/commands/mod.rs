pub mod count;
pub mod export_tree;
pub mod generate;

use std::error::Error;
use std::fs;
use std::path::Path;

use msched_gen::{from_yaml_slice, MultiSchedConfig};

/// Reads a `{catalog, groups, options}` YAML configuration.
pub fn load_config(path: &Path) -> Result<MultiSchedConfig, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    let config = from_yaml_slice(&bytes).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    Ok(config)
}
