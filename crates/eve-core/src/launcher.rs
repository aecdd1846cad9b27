//! Launcher pipeline: environment report, output setup, config merge, run, report.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::config::load_validation_config;
use crate::elements::page;
use crate::environment::{print_banner, RunEnvironment};
use crate::options::RunConfiguration;
use crate::output::{setup_output, write_json, INDEX_HTML, INDEX_JSON};
use crate::scheduler::{run_quiet, Component};

const RULE: &str = " -----------------------------------------------------------------";
const WIDE_RULE: &str = "-------------------------------------------------------------------";

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub index_json: PathBuf,
    pub index_html: PathBuf,
    pub n_elements: usize,
}

/// Owns the resolved run state and drives one run end to end.
pub struct Launcher<C: Component> {
    config: RunConfiguration,
    environment: RunEnvironment,
    validation: C,
}

impl<C: Component> Launcher<C> {
    pub fn new(config: RunConfiguration, environment: RunEnvironment, validation: C) -> Self {
        Self { config, environment, validation }
    }

    /// Run the whole pipeline, printing status to `out`. Any fault aborts the run.
    pub fn run(&self, out: &mut impl Write) -> Result<RunSummary> {
        print_banner(out, &self.environment)?;

        let out_dir = &self.config.out_dir;
        setup_output(out_dir, &self.config.js_dir()).context("setting up output directory")?;

        writeln!(out, "{RULE}")?;
        writeln!(out, "   Beginning extensions test suite ")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;

        let validation_config = load_validation_config(&self.config.extensions)
            .context("loading extension configs")?;
        let elements = run_quiet(&self.validation, &validation_config, false);
        info!("{} element(s) from {} case(s)", elements.len(), validation_config.len());

        writeln!(out, "{RULE}")?;
        writeln!(out, "   Extensions test suite complete ")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;

        let n_elements = elements.len();
        let summary = page("Summary", "", elements);
        let index_json = write_json(&summary, out_dir, INDEX_JSON).context("writing summary")?;
        let index_html = out_dir.join(INDEX_HTML);

        writeln!(out, "{WIDE_RULE}")?;
        writeln!(out, " Done!  Results can be seen in a web browser at:")?;
        writeln!(out, "   {}", index_html.display())?;
        writeln!(out, "{WIDE_RULE}")?;

        Ok(RunSummary { index_json, index_html, n_elements })
    }
}
