//! Run environment capture and the startup banner.

use std::fs;
use std::io::{self, Write};

use chrono::Local;

const UNKNOWN: &str = "unknown";

const BANNER: &[&str] = &[
    "--------------------------------------------------------------------",
    "                    ______  ____    ____  ______                    ",
    "                   |  ____| \\ \\ \\  / / / |  ____|                   ",
    "                   | |__     \\ \\ \\/ / /  | |__                      ",
    "                   |  __|     \\ \\/ / /   |  __|                     ",
    "                   | |____     \\  / /    | |____                    ",
    "                   |______|     \\/_/     |______|                   ",
    "                                                                    ",
    "    Extended Verification and Validation for Earth System Models    ",
    "--------------------------------------------------------------------",
];

/// Who, where and when a run happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEnvironment {
    pub timestamp: String,
    pub user: String,
    pub os_type: String,
    pub machine: String,
    pub comment: String,
}

impl RunEnvironment {
    /// Snapshot the current process environment.
    pub fn capture(comment: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            user: current_user(),
            os_type: std::env::consts::OS.to_string(),
            machine: machine_name(),
            comment: comment.into(),
        }
    }
}

fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn machine_name() -> String {
    for path in ["/etc/hostname", "/proc/sys/kernel/hostname"] {
        if let Ok(name) = fs::read_to_string(path) {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }
    ["HOSTNAME", "COMPUTERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Print the banner followed by the environment block.
pub fn print_banner(out: &mut impl Write, env: &RunEnvironment) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "  Current run: {}", env.timestamp)?;
    writeln!(out, "  User: {}", env.user)?;
    writeln!(out, "  OS Type: {}", env.os_type)?;
    writeln!(out, "  Machine: {}", env.machine)?;
    writeln!(out, "  {}", env.comment)?;
    Ok(())
}
