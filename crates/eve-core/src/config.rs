//! Extension configuration loading.
//!
//! Each extension file is a JSON object; files are merged left to right so
//! later files override earlier ones.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::error::{EveError, Result};

/// Merged extension configuration: one entry per validation case.
pub type ValidationConfig = Map<String, Value>;

/// Merge `overlay` onto `base`.
///
/// Objects on both sides merge key by key, recursively. Any other pairing
/// (scalars, arrays, mismatched types) takes the overlay value whole.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => merge_maps(base_map, overlay_map),
        (base, overlay) => *base = overlay,
    }
}

fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => merge(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}

/// Read one extension config file. The document must be a JSON object.
pub fn read_json(path: &Path) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path).map_err(|e| EveError::io(path, e))?;
    match serde_json::from_str(&text).map_err(|e| EveError::json(path, e))? {
        Value::Object(map) => Ok(map),
        _ => Err(EveError::NotAnObject { path: path.to_path_buf() }),
    }
}

/// Load and merge every extension config in order. No paths → empty config.
pub fn load_validation_config<P: AsRef<Path>>(paths: &[P]) -> Result<ValidationConfig> {
    let mut merged = ValidationConfig::new();
    for path in paths {
        let path = path.as_ref();
        let doc = read_json(path)?;
        debug!("{}: {} top-level entries", path.display(), doc.len());
        merge_maps(&mut merged, doc);
    }
    info!("merged {} extension config(s) into {} case(s)", paths.len(), merged.len());
    Ok(merged)
}
