use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use msched_gen::{check_sample_size, summarize, to_yaml_string};

use super::load_config;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// YAML file with `catalog`, `groups` and `options`.
    #[arg(long)]
    pub config: PathBuf,
    /// Emit the summary as JSON instead of text.
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,
    /// Emit the summary as YAML instead of text.
    #[arg(long)]
    pub yaml: bool,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args.config)?;
    check_sample_size(config.options.max_size).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let summary = summarize(&config.catalog, &config.groups, &config.options)
        .map_err(|err| Box::new(err) as Box<dyn Error>)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if args.yaml {
        let yaml = to_yaml_string(&summary).map_err(|err| Box::new(err) as Box<dyn Error>)?;
        print!("{yaml}");
        return Ok(());
    }
    for dimension in &summary.dimensions {
        println!(
            "{:<40} {:>4}  [{}]",
            dimension.label,
            dimension.candidates.len(),
            dimension.candidates.join(", ")
        );
    }
    let emitted = summary.total.min(config.options.max_size);
    println!("total combinations: {}", summary.total);
    println!("parameter sets after sampling: {}", emitted);
    Ok(())
}
