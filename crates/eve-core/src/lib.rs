//! Extended verification and validation (EVE) for earth system model output.
//!
//! The launcher pipeline runs strictly in order:
//! parse → report environment → set up output → load/merge config → run → write report.

pub mod config;
pub mod elements;
pub mod environment;
pub mod error;
pub mod launcher;
pub mod options;
pub mod output;
pub mod scheduler;
pub mod validation;

pub use config::{load_validation_config, merge, ValidationConfig};
pub use elements::{page, ResultElement, SummaryPage};
pub use environment::RunEnvironment;
pub use error::{EveError, Result};
pub use launcher::Launcher;
pub use options::RunConfiguration;
pub use validation::{CommandExtension, Extension, Validation};
