//! Smithy Extract CLI
//!
//! Command-line interface for extracting a minimal shape closure from a
//! Smithy JSON AST model and printing it as Smithy IDL.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use smithy_extract_common::ExtractionConfig;
use smithy_extract_generator::IdlEmitter;
use smithy_extract_parser::{DependencyResolver, SmithyModel, SmithyParser};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_MODEL_PATH: &str = "model/dynamo.json.bak";

#[derive(Parser)]
#[command(name = "smithy-extract")]
#[command(version, about = "Extract a minimal Smithy IDL model from a Smithy JSON AST", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the root shapes and render their closure as Smithy IDL
    #[command(after_help = "EXAMPLES:\n  \
        # Extract GetItem/PutItem/CreateTable from the DynamoDB model\n  \
        smithy-extract extract --model model/dynamo.json.bak > dynamo.smithy\n\n  \
        # Use a different root set and keep documentation comments\n  \
        smithy-extract extract --model s3.json --config s3-extract.yaml --docs")]
    Extract {
        /// Path to the Smithy JSON AST model
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,

        /// YAML extraction config (built-in DynamoDB roots if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the IDL to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render documentation traits as `///` comments
        #[arg(long)]
        docs: bool,
    },

    /// List the shape IDs reachable from the root shapes
    Deps {
        /// Path to the Smithy JSON AST model
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,

        /// YAML extraction config (built-in DynamoDB roots if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract {
            model,
            config,
            output,
            docs,
        } => {
            extract_command(&model, config.as_deref(), output.as_deref(), docs)?;
        }
        Commands::Deps { model, config } => {
            deps_command(&model, config.as_deref())?;
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries only command output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn extract_command(
    model_path: &Path,
    config_path: Option<&Path>,
    output: Option<&Path>,
    docs: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    config.include_docs |= docs;

    let model = load_model(model_path)?;
    let shape_ids = resolve(&model, &config);
    let rendered = render_idl(&model, &shape_ids, config)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} shapes to {}",
                "✓".green(),
                shape_ids.len(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn deps_command(model_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let model = load_model(model_path)?;

    for shape_id in resolve(&model, &config) {
        println!("{}", shape_id);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => {
            eprintln!("{} Loading config: {}", "→".cyan(), path.display());
            ExtractionConfig::from_file(path).context("Failed to load extraction config")
        }
        None => Ok(ExtractionConfig::default()),
    }
}

fn load_model(path: &Path) -> Result<SmithyModel> {
    eprintln!("{} Loading model: {}", "→".cyan(), path.display());
    let parser = SmithyParser::from_file(path).context("Failed to load Smithy model")?;
    Ok(parser.into_model())
}

fn resolve(model: &SmithyModel, config: &ExtractionConfig) -> BTreeSet<String> {
    let resolver = DependencyResolver::new(model);
    let mut shape_ids = BTreeSet::new();
    for root in config.roots() {
        tracing::debug!(root = %root, "resolving root");
        resolver.resolve(&root, &mut shape_ids);
    }

    eprintln!(
        "{} Resolved {} of {} shapes",
        "→".cyan(),
        shape_ids.len().to_string().yellow(),
        model.shapes.len()
    );
    shape_ids
}

fn render_idl(
    model: &SmithyModel,
    shape_ids: &BTreeSet<String>,
    config: ExtractionConfig,
) -> Result<String> {
    let emitter = IdlEmitter::new(config).context("Failed to create emitter")?;
    emitter
        .render(model, shape_ids)
        .context("Failed to render Smithy IDL")
}
