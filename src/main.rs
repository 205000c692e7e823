use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hammerstep::config::{self, GlobalConfig};
use hammerstep::{
    Action, ExecutionResult, Platform, StaticEnvironment, StepRequest, WriteSink, perform,
};

/// Run one hammer build step against a project.
#[derive(Debug, Parser)]
#[command(name = "hammerstep", version, about)]
struct Cli {
    /// hammer installation directory (overrides the config file)
    #[arg(long)]
    install_dir: Option<String>,

    /// JDBC drivers directory (overrides the config file)
    #[arg(long)]
    drivers_dir: Option<String>,

    /// Project directory passed to hammer as --project
    #[arg(long)]
    project_dir: String,

    /// Target server; required for every action except checkdrivers
    #[arg(long)]
    server: Option<String>,

    /// Action to perform: forecast, snapshot, deploy, status, checkdrivers
    #[arg(long)]
    action: Action,

    /// Working directory for the child process (defaults to the project dir)
    #[arg(long)]
    working_dir: Option<PathBuf>,

    /// Build-time variable layered over the inherited environment
    #[arg(long = "env", value_name = "KEY=VALUE")]
    env: Vec<String>,
}

fn main() -> ExitCode {
    // Internal diagnostics go to stderr; stdout belongs to the step log.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hammerstep=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(result) if result.succeeded => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("hammerstep error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExecutionResult> {
    let config = GlobalConfig::load()?;
    let install_dir = cli.install_dir.unwrap_or(config.hammer.install_dir);
    let drivers_dir = cli.drivers_dir.unwrap_or(config.hammer.drivers_dir);
    if install_dir.trim().is_empty() || drivers_dir.trim().is_empty() {
        let hint = config::user_config_path()
            .map(|p| format!(" (set them in {} or pass the flags)", p.display()))
            .unwrap_or_default();
        bail!("install dir and drivers dir must be configured{hint}");
    }

    let working_dir = cli
        .working_dir
        .unwrap_or_else(|| PathBuf::from(&cli.project_dir));

    let request = StepRequest {
        install_dir,
        drivers_dir,
        project_dir: cli.project_dir,
        server: cli.server,
        action: cli.action,
        working_dir,
    };

    let env = StaticEnvironment(parse_env_pairs(&cli.env)?);
    let mut sink = WriteSink(io::stdout());
    tracing::info!(action = %request.action, "running hammer step");
    Ok(perform(&request, Platform::current(), &env, &mut sink))
}

fn parse_env_pairs(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid --env value (expected KEY=VALUE): {pair}");
        };
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}
