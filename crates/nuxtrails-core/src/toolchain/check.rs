//! Runtime detection for Node.js and npm

use crate::error::ScaffoldError;
use anyhow::Result;
use colored::Colorize;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

/// Fail unless Node.js and npm are both on PATH
///
/// Every command that shells out (`new`, `init prisma`, `generate model`)
/// calls this first so the user gets one clear message instead of a
/// mid-cascade spawn error. When both are present, their detected
/// versions are echoed before any toolchain command runs.
pub fn ensure_node_runtime() -> Result<()> {
    let runtimes = [check_node(), check_npm()];
    let missing: Vec<&str> = runtimes
        .iter()
        .filter(|info| !info.available)
        .map(|info| info.name)
        .collect();

    if !missing.is_empty() {
        return Err(ScaffoldError::RuntimeMissing(missing.join(", ")).into());
    }

    println!(
        "{}",
        format!("Using: {}", runtime_summary(&runtimes)).dimmed()
    );
    Ok(())
}

/// One-line summary of detected runtimes, e.g. "Node.js v22.1.0, npm 10.5.0"
fn runtime_summary(runtimes: &[RuntimeInfo]) -> String {
    runtimes
        .iter()
        .map(|info| match &info.version {
            Some(version) => format!("{} {}", info.name, version),
            None => info.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
