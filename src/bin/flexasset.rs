//! Command-line front end: loads an asset config against a public directory
//! and prints the markup, errors, or full state for an area.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexasset::{
    render_scripts, render_styles, AssetConfig, AssetKind, AssetRegistry, PublicDirResolver,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "flexasset",
    version,
    about = "Render registered stylesheets and scripts per area"
)]
struct Cli {
    /// Asset configuration file (.yaml, .yml or .json)
    #[arg(short, long, global = true, default_value = "flexasset.yaml")]
    config: PathBuf,

    /// Directory relative asset paths are resolved against
    #[arg(long, global = true, default_value = "public")]
    public_dir: PathBuf,

    /// Prefix for generated public URLs (e.g. https://example.com)
    #[arg(long, global = true, default_value = "")]
    url_prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print <link>/<style> markup for an area
    Styles { area: String },
    /// Print <script> markup for an area
    Scripts { area: String },
    /// List paths that could not be found
    Errors {
        /// Only list one kind (css or js)
        #[arg(long)]
        kind: Option<AssetKind>,
    },
    /// Print the full registry state as JSON
    Dump,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AssetConfig::from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let resolver = PublicDirResolver::new(&cli.public_dir).with_url_prefix(cli.url_prefix);
    let registry = AssetRegistry::from_config(&config, resolver);

    match cli.command {
        Command::Styles { area } => print!("{}", render_styles(&registry, &area)?),
        Command::Scripts { area } => print!("{}", render_scripts(&registry, &area)?),
        Command::Errors { kind: Some(kind) } => {
            for path in registry.errors_of(kind) {
                println!("{}", path);
            }
        }
        Command::Errors { kind: None } => {
            for error in registry.errors().iter() {
                println!("{}", error);
            }
        }
        Command::Dump => println!("{}", registry.debug_dump()?),
    }

    Ok(())
}
