use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use release_versioning::cli::{run_bump_workflow, BumpWorkflowArgs};
use release_versioning::config;
use release_versioning::registry::StrategyRegistry;
use release_versioning::ui;

#[derive(Parser)]
#[command(
    name = "release-versioning",
    version,
    about = "Compute the next release version with a pluggable versioning strategy"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, env = "CONFIG_FILE", help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the next version and print it as key=value lines
    Bump {
        #[arg(help = "Current released version; omit for a first release")]
        current: Option<String>,

        #[arg(short, long = "bump", env = "BUMP_CLASSIFICATION", help = "patch, minor, breaking or major")]
        bump: Option<String>,

        #[arg(short, long, env = "VERSIONING_STRATEGY", help = "Versioning strategy identifier")]
        strategy: Option<String>,

        #[arg(long, env = "FORCE_MAJOR", help = "Promote pre-1.0 breaking changes to 1.0.0")]
        force_major: bool,

        #[arg(long, env = "PRERELEASE", help = "Produce a pre-release version")]
        prerelease: bool,

        #[arg(long, env = "PRERELEASE_TYPE", help = "Pre-release label (alpha, beta, rc, ...)")]
        prerelease_type: Option<String>,
    },
    /// List the registered versioning strategies
    Strategies,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = StrategyRegistry::with_builtins();

    match cli.command {
        Commands::Bump {
            current,
            bump,
            strategy,
            force_major,
            prerelease,
            prerelease_type,
        } => {
            let args = BumpWorkflowArgs {
                strategy,
                current,
                classification: bump,
                force_major,
                prerelease,
                prerelease_type,
            };

            let config = config::load_config(cli.config.as_deref())
                .context("failed to load configuration")?;
            let result = run_bump_workflow(&args, config, &registry)?;
            ui::display_status(&format!("using strategy {}", result.strategy));
            ui::display_outputs(&result);
            match &result.previous {
                Some(previous) => {
                    ui::display_success(&format!("{} -> {}", previous, result.next))
                }
                None => {
                    ui::display_status("no current version, using initial version");
                    ui::display_success(&format!("initial version {}", result.next))
                }
            }
        }
        Commands::Strategies => {
            // Listing needs no config; fall back to defaults for the marker.
            let config = config::load_config(cli.config.as_deref()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load configuration, using defaults");
                config::Config::default()
            });
            ui::display_strategies(&registry.ids(), &config.versioning);
        }
    }

    Ok(())
}
