mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, enneagram::EnneagramSubcommand, progress::ProgressSubcommand,
    role::RoleSubcommand,
};
use lifecraft_core::types::{ModuleId, UserId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lifecraft",
    about = "LifeCraft journey: module progress, prerequisite gates and assessments",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .lifecraft/)
    #[arg(long, global = true, env = "LIFECRAFT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .lifecraft/ with a default config and an empty database
    Init,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides server.port; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the module registry
    Modules,

    /// Check whether a user may start a module
    Gate {
        module: ModuleId,
        #[arg(long)]
        user: UserId,
    },

    /// Inspect and change a user's module progress
    Progress {
        #[command(subcommand)]
        subcommand: ProgressSubcommand,
    },

    /// Show a user's full journey
    Journey {
        #[arg(long)]
        user: UserId,
    },

    /// Show the next recommended module for a user
    Next {
        #[arg(long)]
        user: UserId,
    },

    /// Manage user roles
    Role {
        #[command(subcommand)]
        subcommand: RoleSubcommand,
    },

    /// Enneagram item banks and scoring
    Enneagram {
        #[command(subcommand)]
        subcommand: EnneagramSubcommand,
    },

    /// Show or validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
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
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port } => cmd::serve::run(&root, port),
        Commands::Modules => cmd::modules::run(cli.json),
        Commands::Gate { module, user } => cmd::gate::run(&root, module, &user, cli.json),
        Commands::Progress { subcommand } => cmd::progress::run(&root, subcommand, cli.json),
        Commands::Journey { user } => cmd::journey::run(&root, &user, cli.json),
        Commands::Next { user } => cmd::next::run(&root, &user, cli.json),
        Commands::Role { subcommand } => cmd::role::run(&root, subcommand, cli.json),
        Commands::Enneagram { subcommand } => cmd::enneagram::run(subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
