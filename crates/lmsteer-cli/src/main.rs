//! LMSteer CLI
//!
//! Command-line interface for compiling steering configs from a model tree
//! and a rules file

use clap::{Parser, Subcommand};
use lmsteer_core::logging_facility::{self, Profile};
use lmsteer_core_types::RequestContext;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lmsteer")]
#[command(about = "LMSteer - Select which model layers to capture activations from", long_about = None)]
struct Cli {
    /// Log output format on stderr (dev or json)
    #[arg(long, global = true, env = "LMSTEER_LOG_FORMAT", default_value = "dev")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the module tree, or the details of one node
    Tree(commands::tree::TreeArgs),
    /// List leaf modules with their types
    Leaves(commands::leaves::LeavesArgs),
    /// Resolve rules against a model and write its steering config
    Compile(commands::compile::CompileArgs),
    /// Show every rule matching one leaf and which one decides it
    Explain(commands::explain::ExplainArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    let ctx = RequestContext::new();
    let _span = tracing::info_span!("lmsteer", request_id = %ctx.request_id).entered();

    let result = match cli.command {
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Leaves(args) => commands::leaves::execute(args),
        Commands::Compile(args) => commands::compile::execute(args, ctx),
        Commands::Explain(args) => commands::explain::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
