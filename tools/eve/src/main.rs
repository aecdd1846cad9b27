/// EVE launcher: run the extended V&V test suite described by one or more
/// JSON extension configs and write a summary report.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eve_core::{CommandExtension, Launcher, RunConfiguration, RunEnvironment, Validation};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "eve", version, about = "Extended verification and validation for earth system models")]
struct Args {
    /// Location of the JSON configuration files for the extended V&V tests to run.
    #[arg(short, long, num_args = 1..)]
    extensions: Option<Vec<PathBuf>>,

    /// Location to output the EVE webpages [default: ./vv_<YYYY-MM-DD>].
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Free-text comment shown in the run report.
    #[arg(short, long)]
    comment: Option<String>,

    /// Directory holding the report viewer resources.
    #[arg(long)]
    resource_dir: Option<PathBuf>,
}

impl Args {
    fn into_run_config(self) -> eve_core::Result<RunConfiguration> {
        RunConfiguration::resolve(self.extensions, self.out_dir, self.resource_dir, self.comment)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_run_config()?;
    let environment = RunEnvironment::capture(config.comment.clone());
    let validation = Validation::new().with("command", Box::new(CommandExtension));
    log::debug!("registered extensions: {:?}", validation.modules().collect::<Vec<_>>());

    let launcher = Launcher::new(config, environment, validation);
    launcher.run(&mut io::stdout().lock())?;
    Ok(())
}

// ── Unit tests ────────────────────────────────────────────────────────────────
