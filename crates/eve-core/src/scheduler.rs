//! Sequential case scheduler.

use std::time::Instant;

use log::info;
use serde_json::Value;

use crate::config::ValidationConfig;
use crate::elements::ResultElement;

/// A set of runnable cases, e.g. the validation extensions.
pub trait Component {
    fn name(&self) -> &str;

    /// Run one case. Failures are reported as elements, not returned.
    fn run_case(&self, case: &str, config: &Value) -> Vec<ResultElement>;
}

/// Run every case in `config` through `component`, one after another, without
/// printing progress. Cases run in config order.
///
/// With `group` set, each case's elements are wrapped in one section titled
/// with the case name.
pub fn run_quiet(
    component: &dyn Component,
    config: &ValidationConfig,
    group: bool,
) -> Vec<ResultElement> {
    let mut results = Vec::new();
    for (case, case_config) in config {
        let start = Instant::now();
        info!("{}: starting {case}", component.name());
        let elements = component.run_case(case, case_config);
        info!(
            "{}: {case} finished with {} element(s) in {} ms",
            component.name(),
            elements.len(),
            start.elapsed().as_millis()
        );
        if group {
            results.push(ResultElement::section(case.as_str(), elements));
        } else {
            results.extend(elements);
        }
    }
    results
}
