//! MDH CLI - MD Homecare content engine.
//!
//! Provides commands for:
//! - `resolve`: Split a service slug into base service and suburb
//! - `service`: Render a localized service page
//! - `related`: List nearby suburbs
//! - `blog`: List blog posts or show one
//! - `tools`: Browse the tool index
//! - `eligibility`: Replay answers through an eligibility questionnaire
//! - `budget`: Summarize supports for a set of goals
//! - `check`: Validate the data directory

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    BlogArgs, BudgetArgs, CheckArgs, EligibilityArgs, GlobalArgs, RelatedArgs, ResolveArgs,
    ServiceArgs, ToolsArgs,
};
use output::Output;

/// MDH - MD Homecare content engine.
#[derive(Parser)]
#[command(name = "mdh", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a service slug into base service and suburb.
    Resolve(ResolveArgs),
    /// Show a localized service page.
    Service(ServiceArgs),
    /// List suburbs in the same region and state.
    Related(RelatedArgs),
    /// List blog posts, or show one.
    Blog(BlogArgs),
    /// Browse the tool index.
    Tools(ToolsArgs),
    /// Answer an eligibility questionnaire.
    Eligibility(EligibilityArgs),
    /// Explore budget supports for selected goals.
    Budget(BudgetArgs),
    /// Validate the data directory.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let global = &cli.global;
    let result = match cli.command {
        Commands::Resolve(args) => args.execute(global),
        Commands::Service(args) => args.execute(global),
        Commands::Related(args) => args.execute(global),
        Commands::Blog(args) => args.execute(global),
        Commands::Tools(args) => args.execute(global),
        Commands::Eligibility(args) => args.execute(global),
        Commands::Budget(args) => args.execute(global),
        Commands::Check(args) => args.execute(global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
