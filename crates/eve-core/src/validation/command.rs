use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{bail, Context};
use log::debug;
use serde_json::Value;

use super::Extension;
use crate::elements::ResultElement;

/// Runs an external program per case.
///
/// The case config needs a `command` array: program first, then arguments.
/// The full case config is written to the program's stdin as JSON; stdout
/// must be a JSON array of elements, or a single element object.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandExtension;

impl Extension for CommandExtension {
    fn run(&self, case: &str, config: &Value) -> anyhow::Result<Vec<ResultElement>> {
        let argv = command_line(config)?;
        let (program, args) = argv.split_first().context("`command` is empty")?;
        debug!("{case}: running {program} {}", args.join(" "));

        let payload = serde_json::to_vec(config)?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning `{program}`"))?;

        // Feed stdin from its own thread so a program that writes before reading
        // cannot fill the stdout pipe while we are still blocked on stdin.
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || stdin.write_all(&payload))
        });

        let output = child
            .wait_with_output()
            .with_context(|| format!("waiting for `{program}`"))?;
        if let Some(writer) = writer {
            match writer.join() {
                // A program that ignores stdin may close it early.
                Ok(Err(e)) => debug!("{case}: stdin not consumed: {e}"),
                Ok(Ok(())) => {}
                Err(_) => bail!("stdin writer for `{program}` panicked"),
            }
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`{program}` exited with {}: {}", output.status, stderr.trim());
        }

        let parsed: Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("`{program}` did not print JSON"))?;
        match parsed {
            Value::Array(items) => Ok(items.into_iter().map(ResultElement::new).collect()),
            Value::Object(_) => Ok(vec![ResultElement::new(parsed)]),
            other => bail!("`{program}` printed a JSON {}, expected an array or object", kind(&other)),
        }
    }
}

fn command_line(config: &Value) -> anyhow::Result<Vec<String>> {
    let items = config
        .get("command")
        .and_then(Value::as_array)
        .context("case config has no `command` array")?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .context("`command` entries must be strings")
        })
        .collect()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
