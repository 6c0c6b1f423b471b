//! Compile command: tree + rules → steering config file

use clap::Args;
use lmsteer_core::{leaf_set, ExError};
use lmsteer_core_types::RequestContext;
use lmsteer_store::rules_file::parse_rules_file;
use lmsteer_store::tree::parse_tree_file;
use lmsteer_store::{config_io, save_steering_config, SaveOutcome, DEFAULT_BASE_PATH};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Model tree file (YAML or JSON)
    #[arg(long)]
    pub model_tree: PathBuf,

    /// Rules file; rules apply in file order
    #[arg(long)]
    pub rules: PathBuf,

    /// Name used for the output file; defaults to the tree file's model.name
    #[arg(long)]
    pub model_name: Option<String>,

    /// Directory the config is written to
    #[arg(long, env = "LMSTEER_OUT_DIR", default_value = DEFAULT_BASE_PATH)]
    pub out_dir: PathBuf,

    /// Print the config to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: CompileArgs, ctx: RequestContext) -> Result<(), Box<dyn std::error::Error>> {
    let model = parse_tree_file(&args.model_tree)?;
    let model_name = args.model_name.unwrap_or(model.model_name);
    let ctx = ctx.with_model_name(model_name.clone());

    let book = parse_rules_file(&args.rules)?;
    let snapshot = book.snapshot();
    let leaves = leaf_set(&model.root);

    tracing::debug!(
        model_name = ctx.model_name.as_deref().unwrap_or_default(),
        snapshot_version = snapshot.version,
        "Compiling steering config"
    );

    let report = snapshot
        .resolve_with_report(&leaves)
        .map_err(|e| ExError::from(e).with_request_id(ctx.request_id.clone()))?;

    for diagnostic in &report.diagnostics {
        eprintln!("Warning: rule {}: {}", diagnostic.rule_id, diagnostic.message);
    }

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&report.config)?);
        eprintln!("Dry run: {}", report.summary());
        return Ok(());
    }

    match save_steering_config(&report.config, &model_name, &args.out_dir)? {
        SaveOutcome::Saved { path } => {
            println!("{}", report.summary());
            println!("Steering configuration saved to {}", path.display());
        }
        SaveOutcome::SkippedEmpty => {
            println!("{}", report.summary());
            println!(
                "No steering configuration data to save ({} not written)",
                config_io::config_file_name(&model_name)
            );
        }
    }

    Ok(())
}
