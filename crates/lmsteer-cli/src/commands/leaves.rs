//! Leaf listing

use clap::Args;
use lmsteer_core::leaf_set;
use lmsteer_store::tree::parse_tree_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LeavesArgs {
    /// Model tree file (YAML or JSON)
    pub model_tree: PathBuf,

    /// Print a JSON array instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: LeavesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = parse_tree_file(&args.model_tree)?;
    let leaves = leaf_set(&model.root);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&leaves)?);
    } else {
        for leaf in &leaves {
            println!("{}\t{}", leaf.path, leaf.type_tag);
        }
    }

    Ok(())
}
