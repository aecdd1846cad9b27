use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{EveError, Result};

/// Sub-directory of the resource dir holding the report viewer scripts.
pub const JS_DIR: &str = "js";

/// Resolved command-line state for one invocation. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Extension config files, merged left to right.
    pub extensions: Vec<PathBuf>,
    pub out_dir: PathBuf,
    /// Static assets copied next to the report.
    pub resource_dir: PathBuf,
    /// Free-text comment echoed in the environment report.
    pub comment: String,
}

impl RunConfiguration {
    /// Fill in defaults for anything not given on the command line.
    ///
    /// Paths are not checked here; a missing extension file surfaces when the
    /// config is loaded.
    pub fn resolve(
        extensions: Option<Vec<PathBuf>>,
        out_dir: Option<PathBuf>,
        resource_dir: Option<PathBuf>,
        comment: Option<String>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| EveError::io(".", e))?;
        let out_dir = match out_dir {
            Some(dir) => dir,
            None => default_out_dir(&cwd, Local::now().date_naive()),
        };
        let resource_dir = resource_dir.unwrap_or_else(|| default_resource_dir(&cwd));

        Ok(Self {
            extensions: extensions.unwrap_or_default(),
            out_dir,
            resource_dir,
            comment: comment.unwrap_or_default(),
        })
    }

    pub fn js_dir(&self) -> PathBuf {
        self.resource_dir.join(JS_DIR)
    }
}

/// `<cwd>/vv_<YYYY-MM-DD>`
pub fn default_out_dir(cwd: &Path, date: NaiveDate) -> PathBuf {
    cwd.join(format!("vv_{}", date.format("%Y-%m-%d")))
}

/// `resources/` beside the executable, or under `cwd` when the executable
/// location is unknown.
fn default_resource_dir(cwd: &Path) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| cwd.join("resources"))
}
