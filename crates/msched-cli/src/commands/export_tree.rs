use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use msched_gen::{catalog_to_tree, to_canonical_json_bytes};

use super::load_config;

#[derive(Args, Debug)]
pub struct ExportTreeArgs {
    /// YAML file with `catalog`, `groups` and `options`.
    #[arg(long)]
    pub config: PathBuf,
    /// Destination JSON file.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ExportTreeArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args.config)?;
    let tree = catalog_to_tree(&config.catalog);
    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = to_canonical_json_bytes(&tree).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    fs::write(&args.out, bytes)?;
    Ok(())
}
