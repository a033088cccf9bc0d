//! Detection of Node.js, the chosen package manager, and git

use crate::config::{PackageManager, ProjectConfig};
use anyhow::Result;
use std::process::Command;

/// Detection result for one external binary
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, bin: &str) -> RuntimeInfo {
    let output = Command::new(bin).arg("--version").output();

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

/// Check if the chosen package manager is available
pub fn check_package_manager(pm: PackageManager) -> RuntimeInfo {
    match pm {
        PackageManager::Npm => probe("npm", "npm"),
        PackageManager::Yarn => probe("yarn", "yarn"),
    }
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    probe("git", "git")
}

/// Verify everything the pipeline will shell out to, before any side effect
///
/// Node.js and the package manager are hard requirements. Git is only
/// required when the configuration asks for repository initialization
/// (husky also needs it for its hook directory).
pub fn check_prerequisites(config: &ProjectConfig) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node();
    if node.available {
        results.push(node);
    } else {
        missing.push("Node.js (install from https://nodejs.org)");
    }

    let pm = check_package_manager(config.package_manager);
    if pm.available {
        results.push(pm);
    } else {
        missing.push(match config.package_manager {
            PackageManager::Npm => "npm (ships with Node.js)",
            PackageManager::Yarn => "yarn (install from https://yarnpkg.com)",
        });
    }

    if config.git_init || config.husky {
        let git = check_git();
        if git.available {
            results.push(git);
        } else {
            missing.push("git (install from https://git-scm.com)");
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_missing_binary_is_unavailable() {
        let info = probe("nope", "definitely-not-a-real-binary-xyz");
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
