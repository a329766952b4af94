mod cmd;
mod output;
mod root;

use clap::{CommandFactory, Parser, Subcommand};
use cmd::install::InstallArgs;
use cmd::LoadArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sdd",
    about = "Compile agent definitions into configuration for AI coding assistants",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .sdd-toolkit/ or .git/)
    #[arg(long, global = true, env = "SDD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    /// Re-install the previously configured tools (same as `sdd upgrade`)
    #[arg(long)]
    upgrade: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate agent files for one or more tools
    Install(InstallArgs),

    /// Regenerate agent files for the tools already in use
    Upgrade {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// List the agents that would be installed
    List {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// List supported tools and where their files go
    Targets,

    /// List stack profiles
    Profiles,

    /// Show the project's sdd configuration
    View,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Some(Commands::Install(args)) => cmd::install::run(&root, args, cli.json),
        Some(Commands::Upgrade { load }) => cmd::upgrade::run(&root, load, cli.json),
        Some(Commands::List { load }) => cmd::list::run(&root, load, cli.json),
        Some(Commands::Targets) => cmd::targets::run(cli.json),
        Some(Commands::Profiles) => cmd::profiles::run(cli.json),
        Some(Commands::View) => cmd::view::run(&root, cli.json),
        None if cli.upgrade => cmd::upgrade::run(&root, LoadArgs::from_env(), cli.json),
        None => Cli::command().print_help().map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
