use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use log::info;
use msched_gen::{
    catalog_from_tree, from_json_slice, plan_runs, to_canonical_json_bytes, ConfigTree, RunPlan,
};

use super::load_config;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// YAML file with `catalog`, `groups` and `options`.
    #[arg(long)]
    pub config: PathBuf,
    /// Configuration tree JSON replacing the catalog of `--config`.
    #[arg(long)]
    pub tree: Option<PathBuf>,
    /// Output directory for the run plan and job directories.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(&args.config)?;
    if let Some(tree_path) = &args.tree {
        let tree: ConfigTree = from_json_slice(&fs::read(tree_path)?)
            .map_err(|err| Box::new(err) as Box<dyn Error>)?;
        config.catalog = catalog_from_tree(&tree).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    }
    fs::create_dir_all(&args.out)?;
    let plan = plan_runs(&config).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    persist_plan(&args.out, &plan)?;
    info!(
        "wrote {} jobs ({} combinations) to {}",
        plan.jobs.len(),
        plan.total_combinations,
        args.out.display()
    );
    Ok(())
}

fn persist_plan(out: &Path, plan: &RunPlan) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(plan).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    fs::write(out.join("run_plan.json"), bytes)?;
    for job in &plan.jobs {
        let job_dir = out.join(&job.out_dir);
        fs::create_dir_all(&job_dir)?;
        let params_bytes =
            to_canonical_json_bytes(&job.params).map_err(|err| Box::new(err) as Box<dyn Error>)?;
        fs::write(job_dir.join("params.json"), params_bytes)?;
        let status = format!("pending\nseed={}", job.seed);
        fs::write(job_dir.join("STATUS"), status)?;
    }
    Ok(())
}
