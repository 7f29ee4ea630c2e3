//! CodeScope CLI Entry Point
//!
//! Runs the tree builder over a JSON listing and the graph projector over a
//! JSON architecture model, printing the results to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codescope_core::{
    load_listing, ArchitectureModel, CategoryFilter, TreeBuilder, TreeStats, ViewConfig, ViewMode,
};
use codescope_utils::{init_logging, LogLevel, LoggerConfig};
use codescope_viz::{DotExporter, EncodingConfig, GraphSummary, Projector};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "codescope")]
#[command(about = "CodeScope - repository trees and architecture graph views")]
#[command(version)]
struct Cli {
    /// Enable debug logging (same as `--log-level debug`)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Log level: debug, info, warn or error
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a file tree from a flat JSON listing
    Tree {
        /// Listing file (array of records, or an object with a `tree` array)
        listing: PathBuf,

        /// Print tree statistics instead of the tree
        #[arg(long, conflicts_with = "report")]
        stats: bool,

        /// Include orphan and duplicate diagnostics in the output
        #[arg(long)]
        report: bool,
    },

    /// Project an architecture model into a filtered, styled graph
    Project {
        /// Architecture model JSON file
        model: PathBuf,

        /// Language category filter
        #[arg(short = 'c', long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Case-insensitive search term
        #[arg(short = 's', long, default_value = "")]
        search: String,

        /// View mode
        #[arg(short = 'm', long = "view", value_enum, default_value_t = ViewMode::Dependencies)]
        view: ViewMode,

        /// Hide node labels
        #[arg(long)]
        no_labels: bool,

        /// Radius encoding configuration (toml, json or yaml)
        #[arg(short = 'e', long)]
        encoding: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Dot,
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggerConfig {
        level: if cli.verbose { LogLevel::Debug } else { cli.log_level },
        ..LoggerConfig::default()
    })?;

    match cli.command {
        Commands::Tree { listing, stats, report } => run_tree(&listing, stats, report),
        Commands::Project {
            model,
            category,
            search,
            view,
            no_labels,
            encoding,
            format,
        } => {
            let config = ViewConfig {
                category_filter: category,
                search_term: search,
                view_mode: view,
                show_labels: !no_labels,
            };
            run_project(&model, &config, encoding.as_deref(), format)
        }
    }
}

fn run_tree(listing: &Path, stats: bool, report: bool) -> Result<()> {
    let records = load_listing(listing)
        .with_context(|| format!("Failed to read listing {}", listing.display()))?;
    let build = TreeBuilder::new().build_with_report(&records);

    let output = if stats {
        serde_json::to_string_pretty(&TreeStats::collect(&build.forest))?
    } else if report {
        serde_json::to_string_pretty(&build)?
    } else {
        serde_json::to_string_pretty(&build.forest)?
    };
    println!("{output}");
    Ok(())
}

fn run_project(
    model_path: &Path,
    config: &ViewConfig,
    encoding: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let model = ArchitectureModel::from_json_file(model_path)
        .with_context(|| format!("Failed to read model {}", model_path.display()))?;

    let encoding = match encoding {
        Some(path) => EncodingConfig::load(path)
            .with_context(|| format!("Failed to load encoding config {}", path.display()))?,
        None => EncodingConfig::default(),
    };

    let graph = Projector::new(encoding).project(&model.components, &model.relationships, config);
    tracing::info!(nodes = graph.nodes.len(), edges = graph.edges.len(), "projection complete");

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&graph)?,
        OutputFormat::Dot => DotExporter::new().export(&graph),
        OutputFormat::Summary => serde_json::to_string_pretty(&GraphSummary::of(&graph))?,
    };
    println!("{output}");
    Ok(())
}
