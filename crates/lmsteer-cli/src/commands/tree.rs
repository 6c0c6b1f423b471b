//! Module tree view

use clap::Args;
use lmsteer_core::traversal::require;
use lmsteer_core::Node;
use lmsteer_store::tree::parse_tree_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Model tree file (YAML or JSON)
    pub model_tree: PathBuf,

    /// Show details for the node at this full path instead ("" is the root)
    #[arg(long)]
    pub path: Option<String>,

    /// Limit the outline to this many levels below the root
    #[arg(long)]
    pub depth: Option<usize>,
}

pub fn execute(args: TreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = parse_tree_file(&args.model_tree)?;

    if let Some(path) = args.path {
        let node = require(&model.root, &path).map_err(lmsteer_core::ExError::from)?;
        println!("{}", node.details());
        return Ok(());
    }

    println!("{}", model.model_name);
    print_outline(&model.root, 0, args.depth);
    Ok(())
}

fn print_outline(node: &Node, level: usize, max_depth: Option<usize>) {
    let marker = if node.is_leaf() { "-" } else { "+" };
    println!(
        "{}{} {} ({})",
        "  ".repeat(level),
        marker,
        node.name(),
        node.type_tag()
    );

    if max_depth.is_some_and(|max| level >= max) {
        return;
    }
    for child in node.children() {
        print_outline(child, level + 1, max_depth);
    }
}
