//! cake CLI - prompt-driven cake scenes from the terminal
//!
//! Builds a cake from a description and prints or saves the resulting
//! scene document, or runs an interactive session.

use anyhow::{Context, Result};
use cake::{BuildOutcome, CakeConfig, Session};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

mod repl;
mod report;

#[derive(Parser)]
#[command(name = "cake")]
#[command(about = "Describe a cake, get a 3D scene", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a cake from a prompt
    Build {
        /// Free-form description, e.g. "chocolate birthday cake with sprinkles"
        prompt: String,
        /// Seed for decoration placement
        #[arg(short, long)]
        seed: Option<u64>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// What to print
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
        /// Write the scene document (JSON) to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the design attributes extracted from a prompt
    Attributes {
        /// Free-form description
        prompt: String,
    },
    /// List featured designs and suggestion chips
    Presets,
    /// Display information about a saved scene document
    Info {
        /// Path to the JSON scene document
        file: PathBuf,
    },
    /// Interactive session
    Repl {
        /// Seed for decoration placement
        #[arg(short, long)]
        seed: Option<u64>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Attributes and decoration counts
    Summary,
    /// Full scene document
    Json,
    /// Indented node tree
    Outline,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            prompt,
            seed,
            config,
            format,
            output,
        } => {
            let session = open_session(config.as_deref(), seed)?;
            build_cake(session, &prompt, format, output.as_deref())?;
        }
        Commands::Attributes { prompt } => {
            let attrs = cake::extract(&prompt);
            println!("{}", serde_json::to_string_pretty(&attrs)?);
        }
        Commands::Presets => {
            report::print_presets();
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
        Commands::Repl { seed, config } => {
            let session = open_session(config.as_deref(), seed)?;
            repl::run(session)?;
        }
    }

    Ok(())
}

fn open_session(config: Option<&Path>, seed: Option<u64>) -> Result<Session> {
    let config = match config {
        Some(path) => {
            let config = CakeConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            log::info!("loaded config from {}", path.display());
            config
        }
        None => {
            log::debug!("no config file, using defaults");
            CakeConfig::default()
        }
    };
    let seed = seed.or(config.session.seed);
    if let Some(seed) = seed {
        log::debug!("decoration seed {seed}");
    }
    Ok(match seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    })
}

fn build_cake(mut session: Session, prompt: &str, format: Format, output: Option<&Path>) -> Result<()> {
    let outcome = session.visualize(prompt);
    let doc = session.scene().to_document();

    match format {
        Format::Summary => report::print_outcome(session.scene(), &outcome),
        Format::Json => println!("{}", doc.to_json()?),
        Format::Outline => print!("{}", cake_ir::outline::to_outline(&doc)),
    }

    if let Some(path) = output {
        std::fs::write(path, doc.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved {} nodes to {}", doc.nodes.len(), path.display());
        println!("Saved scene to {}", path.display());
    }

    if let BuildOutcome::Fallback { reason, .. } = &outcome {
        log::warn!("showing the fallback cake ({reason})");
    }
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)?;
    let doc = cake_ir::Document::from_json(&json)?;

    if doc.nodes.is_empty() {
        anyhow::bail!("{} contains no nodes", file.display());
    }

    println!("cake scene: {}", file.display());
    println!("  Version: {}", doc.version);
    println!("  Nodes: {}", doc.nodes.len());
    println!("  Meshes: {}", doc.mesh_count());
    println!("  Roots: {}", doc.roots.len());

    println!("\nPrimitives:");
    for (kind, count) in report::primitive_counts(&doc) {
        println!("  {kind}: {count}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cake-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn session_takes_seed_from_config_file() {
        let path = scratch("seeded.toml");
        std::fs::write(&path, "[session]\nseed = 21\n[decorations]\nsprinkles = 3\n").unwrap();
        let session = open_session(Some(&path), None).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(session.config().session.seed, Some(21));
        assert_eq!(session.config().decorations.sprinkles, 3);

        let session = open_session(None, Some(5)).unwrap();
        assert_eq!(session.config().session.seed, Some(5));
    }

    #[test]
    fn missing_config_names_the_file() {
        let path = scratch("absent.toml");
        let err = open_session(Some(&path), None).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn build_saves_the_scene() {
        let path = scratch("scene.json");
        let session = open_session(None, Some(2)).unwrap();
        build_cake(session, "lemon cake", Format::Summary, Some(&path)).unwrap();
        let doc = cake_ir::Document::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(doc.roots.len(), 1);
        assert!(doc.mesh_count() > 0);
    }
}
