mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use hooksmith_core::types::Scope;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hook",
    about = "Generate, validate, and install event-triggered automation hooks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ or .git/)
    #[arg(long, global = true, env = "HOOK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a hook definition from a template
    Build {
        /// Template name (see `hook templates`)
        #[arg(long)]
        template: String,

        /// Language for language-parameterized templates
        #[arg(long)]
        language: Option<String>,

        /// Hook name (default: <template>-<language>)
        #[arg(long)]
        name: Option<String>,

        /// Template parameter, repeatable
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Timeout in seconds (default: per-template)
        #[arg(long)]
        timeout: Option<u32>,

        /// Output directory (default: <root>/.claude/hooks)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run the safety validator against a hook definition file
    Validate { path: PathBuf },

    /// Install a hook definition into a scope's settings
    Install {
        path: PathBuf,
        scope: Scope,

        /// Replace an already-installed hook with the same name
        #[arg(long)]
        replace: bool,
    },

    /// Remove an installed hook by name
    Uninstall { name: String, scope: Scope },

    /// List installed hooks for a scope
    List { scope: Scope },

    /// List available templates
    Templates,

    /// Cross-reference generated and installed hooks
    Status,

    /// Restore a scope's settings from its most recent backup
    Rollback { scope: Scope },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Build {
            template,
            language,
            name,
            params,
            timeout,
            output,
        } => cmd::build::run(
            &root,
            &template,
            language.as_deref(),
            name.as_deref(),
            &params,
            timeout,
            output.as_deref(),
            cli.json,
        ),
        Commands::Validate { path } => cmd::validate::run(&path, cli.json),
        Commands::Install {
            path,
            scope,
            replace,
        } => cmd::install::run(&root, &path, scope, replace, cli.json),
        Commands::Uninstall { name, scope } => cmd::uninstall::run(&root, &name, scope, cli.json),
        Commands::List { scope } => cmd::list::run(&root, scope, cli.json),
        Commands::Templates => cmd::templates::run(cli.json),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Rollback { scope } => cmd::rollback::run(&root, scope, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
