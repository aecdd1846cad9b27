//! The validation component: dispatches each configured case to a
//! registered extension.

mod command;

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use serde_json::Value;

use crate::elements::ResultElement;
use crate::scheduler::Component;

pub use command::CommandExtension;

/// A validation test module. Receives its case name and case config.
pub trait Extension {
    fn run(&self, case: &str, config: &Value) -> anyhow::Result<Vec<ResultElement>>;
}

/// Registry of extensions keyed by module name.
#[derive(Default)]
pub struct Validation {
    extensions: BTreeMap<String, Box<dyn Extension>>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extension` under `module`, replacing any earlier one.
    pub fn register(&mut self, module: impl Into<String>, extension: Box<dyn Extension>) {
        self.extensions.insert(module.into(), extension);
    }

    pub fn with(mut self, module: impl Into<String>, extension: Box<dyn Extension>) -> Self {
        self.register(module, extension);
        self
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    fn try_run(&self, case: &str, config: &Value) -> anyhow::Result<Vec<ResultElement>> {
        let module = config
            .get("module")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("case config has no \"module\" entry"))?;
        let name = module_name(module);
        let extension = self
            .extensions
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("extension module `{name}` is not registered"))?;
        extension.run(case, config)
    }
}

impl Component for Validation {
    fn name(&self) -> &str {
        "validation"
    }

    fn run_case(&self, case: &str, config: &Value) -> Vec<ResultElement> {
        match self.try_run(case, config) {
            Ok(elements) => elements,
            Err(e) => {
                warn!("{case}: {e:#}");
                vec![ResultElement::error(case, format!("{e:#}"))]
            }
        }
    }
}

/// Module name for a `module` entry: the file stem when given a path
/// (`validation/dome.py` → `dome`), else the entry itself.
pub fn module_name(module: &str) -> &str {
    Path::new(module)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(module)
}
