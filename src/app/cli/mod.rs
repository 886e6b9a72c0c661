//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, BuildOptions};
use crate::domain::{AppError, Topology};

#[derive(Parser)]
#[command(name = "nodecfg")]
#[command(version)]
#[command(
    about = "Materialize peer, api and dual node configuration trees from shared templates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the destination tree for all topologies (default)
    #[clap(visible_alias = "b")]
    Build(BuildArgs),
    /// Print the settings of one or all topologies as TOML
    #[clap(visible_alias = "s")]
    Show {
        /// Topology: peer, api, or dual
        topology: Option<String>,
    },
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Template directory [default: ./templates]
    #[arg(short, long)]
    templates: Option<PathBuf>,
    /// Destination directory, must not exist [default: ./_build]
    #[arg(short, long)]
    dest: Option<PathBuf>,
    /// TOML file with `template_dir` and `destination_dir`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        None => run_build(BuildArgs::default()),
        Some(Commands::Build(args)) => run_build(args),
        Some(Commands::Show { topology }) => run_show(topology),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_build(args: BuildArgs) -> Result<(), AppError> {
    let options = BuildOptions {
        config_file: args.config,
        template_dir: args.templates,
        destination_dir: args.dest,
    };

    let outcome = api::build_with_options(options)?;
    tracing::info!(
        destination = %outcome.destination.display(),
        files = outcome.file_count(),
        "build complete"
    );
    Ok(())
}

fn run_show(topology: Option<String>) -> Result<(), AppError> {
    let topology = topology.map(|name| name.parse::<Topology>()).transpose()?;
    print!("{}", api::show(topology)?);
    Ok(())
}
