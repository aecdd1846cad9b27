//! Output directory setup and report writing.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::{EveError, Result};
use crate::options::JS_DIR;

pub const INDEX_JSON: &str = "index.json";
pub const INDEX_HTML: &str = "index.html";

const INDEX_HTML_BODY: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>EVE: Extended Verification and Validation</title>
  <script src="js/eve.js" defer></script>
</head>
<body>
  <div id="report" data-src="index.json">
    <p>Raw results: <a href="index.json">index.json</a></p>
  </div>
</body>
</html>
"#;

/// Create `out_dir`, write the HTML entry page, and copy `<js_dir>` into
/// `<out_dir>/js` when it exists. An existing `out_dir` is reused.
///
/// Nothing is copied when the two script directories overlap, which happens
/// when the resource dir points into the output dir.
pub fn setup_output(out_dir: &Path, js_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| EveError::io(out_dir, e))?;

    let index = out_dir.join(INDEX_HTML);
    fs::write(&index, INDEX_HTML_BODY).map_err(|e| EveError::io(&index, e))?;

    if js_dir.is_dir() {
        let dst = out_dir.join(JS_DIR);
        fs::create_dir_all(&dst).map_err(|e| EveError::io(&dst, e))?;
        if overlaps(js_dir, &dst)? {
            debug!("{} overlaps {}, not copying", js_dir.display(), dst.display());
        } else {
            copy_dir(js_dir, &dst)?;
        }
    } else {
        debug!("no viewer scripts at {}", js_dir.display());
    }
    info!("output set up in {}", out_dir.display());
    Ok(())
}

/// Whether either directory is, or lies inside, the other.
fn overlaps(a: &Path, b: &Path) -> Result<bool> {
    let a = fs::canonicalize(a).map_err(|e| EveError::io(a, e))?;
    let b = fs::canonicalize(b).map_err(|e| EveError::io(b, e))?;
    Ok(a.starts_with(&b) || b.starts_with(&a))
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| EveError::io(dst, e))?;
    for entry in fs::read_dir(src).map_err(|e| EveError::io(src, e))? {
        let entry = entry.map_err(|e| EveError::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| EveError::io(&from, e))?;
        }
    }
    Ok(())
}

/// Serialize `value` as pretty JSON to `<dir>/<name>`, creating `dir` if needed.
pub fn write_json<T: Serialize>(value: &T, dir: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| EveError::io(dir, e))?;
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(value).map_err(|e| EveError::json(&path, e))?;
    fs::write(&path, text).map_err(|e| EveError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_nested_dir_and_index() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("a/b/vv");
        setup_output(&out, &tmp.path().join("no-resources/js")).unwrap();
        assert!(out.join(INDEX_HTML).is_file());
        assert!(!out.join(JS_DIR).exists());
    }

    #[test]
    fn test_setup_copies_viewer_scripts() {
        let tmp = TempDir::new().unwrap();
        let js = tmp.path().join("res/js");
        fs::create_dir_all(js.join("lib")).unwrap();
        fs::write(js.join("eve.js"), "// viewer").unwrap();
        fs::write(js.join("lib/plot.js"), "// plot").unwrap();

        let out = tmp.path().join("out");
        setup_output(&out, &js).unwrap();
        assert_eq!(fs::read_to_string(out.join("js/eve.js")).unwrap(), "// viewer");
        assert!(out.join("js/lib/plot.js").is_file());
    }

    #[test]
    fn test_index_links_raw_results() {
        let tmp = TempDir::new().unwrap();
        setup_output(tmp.path(), &tmp.path().join("none")).unwrap();
        let html = fs::read_to_string(tmp.path().join(INDEX_HTML)).unwrap();
        assert!(html.contains(r#"<a href="index.json">"#));
    }

    #[test]
    fn test_setup_leaves_scripts_already_in_out_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        fs::create_dir_all(out.join("js")).unwrap();
        fs::write(out.join("js/eve.js"), "// viewer").unwrap();

        // Resource dir resolving to the output dir itself.
        setup_output(&out, &out.join("js")).unwrap();
        assert_eq!(fs::read_to_string(out.join("js/eve.js")).unwrap(), "// viewer");

        // Output dir nested inside the scripts dir.
        let nested = out.join("js/report");
        setup_output(&nested, &out.join("js")).unwrap();
        assert!(!nested.join("js/report").exists());
        assert_eq!(fs::read_to_string(out.join("js/eve.js")).unwrap(), "// viewer");
    }

    #[test]
    fn test_setup_reuses_existing_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("keep.txt"), "x").unwrap();
        setup_output(tmp.path(), &tmp.path().join("js")).unwrap();
        assert!(tmp.path().join("keep.txt").is_file());
    }

    #[test]
    fn test_write_json_round_trips() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("fresh");
        let path = write_json(&json!({"title": "Summary"}), &dir, INDEX_JSON).unwrap();
        assert_eq!(path, dir.join(INDEX_JSON));
        let back: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back["title"], "Summary");
    }

    #[test]
    fn test_write_json_into_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "").unwrap();
        assert!(matches!(write_json(&json!({}), &file, INDEX_JSON), Err(EveError::Io { .. })));
    }
}
