//! Climate Mind graph processor CLI
//!
//! - `process`: run the pipeline over an ontology export and write the
//!   processed graph, the visualization view bundle and the test-ontology
//!   graph as JSON.
//! - `inspect`: reload a processed graph and print the root's rankings.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use climind_core::config::{AdaptationPaths, CliOverrides};
use climind_core::errors::{ClimindErrorCode, PipelineError};
use climind_core::tracing::init_tracing;
use climind_core::ClimindConfig;
use climind_graph::{GraphDocument, OntologyExport, Pipeline};

#[derive(Parser)]
#[command(name = "climind")]
#[command(version, about = "Climate Mind causal knowledge graph processor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an ontology export into the annotated graph and its views.
    Process(ProcessArgs),

    /// Print the root's mitigation ranking, general myths and counts from a
    /// processed graph.
    Inspect(InspectArgs),
}

#[derive(Args)]
struct ProcessArgs {
    /// Ontology export JSON (concepts + edges)
    export: PathBuf,
    /// Directory the output files are written to
    output_dir: PathBuf,
    #[command(flatten)]
    common: CommonArgs,
    /// Graph adaptation paths are enumerated on: acyclic or raw
    #[arg(long)]
    adaptation_paths: Option<AdaptationPaths>,
    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Args)]
struct InspectArgs {
    /// Processed graph JSON written by `process`
    graph: PathBuf,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct CommonArgs {
    /// Config file (defaults to ./climind.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Root concept label
    #[arg(long)]
    root: Option<String>,
    /// Log level (overridden by CLIMIND_LOG)
    #[arg(long)]
    log_level: Option<String>,
    /// Write logs to stderr as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Process(args) => cmd_process(args),
        Commands::Inspect(args) => cmd_inspect(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<PipelineError>()
                .map_or("ERROR", |e| e.error_code());
            eprintln!("[{code}] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(common: &CommonArgs, overrides: CliOverrides) -> Result<ClimindConfig> {
    let cwd = std::env::current_dir().context("reading working directory")?;
    let overrides = CliOverrides {
        root_concept: common.root.clone(),
        log_level: common.log_level.clone(),
        log_json: common.log_json.then_some(true),
        ..overrides
    };
    let config = ClimindConfig::load(&cwd, common.config.as_deref(), Some(&overrides))
        .map_err(PipelineError::from)?;
    init_tracing(&config.observability);
    Ok(config)
}

fn cmd_process(args: ProcessArgs) -> Result<()> {
    let config = load_config(
        &args.common,
        CliOverrides {
            adaptation_paths: args.adaptation_paths,
            pretty: args.compact.then_some(false),
            ..Default::default()
        },
    )?;

    let export: OntologyExport = read_json(&args.export)?;
    let processed = Pipeline::new(config.clone()).run(&export)?;

    let out = &args.output_dir;
    fs::create_dir_all(out).map_err(|e| PipelineError::io(out, e))?;
    let pretty = config.output.pretty;
    write_json(
        &out.join(&config.output.graph_file),
        &GraphDocument::from_graph(&processed.graph),
        pretty,
    )?;
    write_json(
        &out.join(&config.output.views_file),
        &processed.views.to_documents(),
        pretty,
    )?;
    write_json(
        &out.join(&config.output.test_ontology_file),
        &GraphDocument::from_graph(&processed.test_ontology),
        pretty,
    )?;
    info!(dir = %out.display(), "outputs written");

    println!("{}", serde_json::to_string_pretty(&processed.summary)?);
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let config = load_config(&args.common, CliOverrides::default())?;
    let document: GraphDocument = read_json(&args.graph)?;
    let graph = document.into_graph().map_err(PipelineError::from)?;

    let root_label = &config.vocabulary.root_concept;
    let root = graph
        .require_root(root_label)
        .map_err(PipelineError::from)?;
    let root = graph.node(root);

    println!("root: {root_label}");
    println!("nodes: {}  edges: {}", graph.node_count(), graph.edge_count());
    let solutions = graph
        .node_indices()
        .filter(|&n| graph.node(n).is_risk_solution)
        .count();
    let myths = graph.node_indices().filter(|&n| graph.node(n).is_myth).count();
    println!("risk solutions: {solutions}  myths: {myths}");

    print_ranked("mitigation solutions", root.mitigation_solutions.as_deref());
    print_ranked("general myths", root.general_myths.as_deref());
    Ok(())
}

fn print_ranked(title: &str, items: Option<&[String]>) {
    match items {
        Some(items) if !items.is_empty() => {
            println!("{title}:");
            for (rank, item) in items.iter().enumerate() {
                println!("  {:>3}. {item}", rank + 1);
            }
        }
        Some(_) => println!("{title}: none"),
        None => println!("{title}: not computed"),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    let value = serde_json::from_str(&content)
        .map_err(PipelineError::from)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(value)
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(PipelineError::from)?;
    fs::write(path, json).map_err(|e| PipelineError::io(path, e))?;
    Ok(())
}
