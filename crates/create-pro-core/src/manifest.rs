//! `package.json` document handling
//!
//! The manifest is the only generated file this tool reads back: the package
//! manager writes it during `init` and dependency installs, and the config
//! file generator then rewrites the script set. Unknown fields are preserved
//! across the round trip.

use crate::config::ProjectConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// Parsed `package.json` with everything we don't manage kept in `extra`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,

    #[serde(
        rename = "lint-staged",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lint_staged: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Read and parse `<dir>/package.json`
    pub async fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join("package.json");
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write back to `<dir>/package.json` as 2-space-indented JSON
    pub async fn save(&self, project_dir: &Path) -> Result<()> {
        let path = project_dir.join("package.json");
        let mut content =
            serde_json::to_string_pretty(self).context("Failed to serialize package.json")?;
        content.push('\n');
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Apply the configuration-driven manifest rules
    ///
    /// Sets the module-type marker, replaces the script set with exactly
    /// `{dev, build, preview}` plus the flag-gated entries, and adds the
    /// lint-staged block when prettier is enabled.
    pub fn apply_config(&mut self, config: &ProjectConfig) {
        self.module_type = Some("module".to_string());

        let mut scripts = BTreeMap::new();
        scripts.insert("dev".to_string(), "vite".to_string());
        scripts.insert("build".to_string(), "vite build".to_string());
        scripts.insert("preview".to_string(), "vite preview".to_string());
        if config.eslint {
            scripts.insert(
                "lint".to_string(),
                "eslint src/**/*.{js,jsx,ts,tsx}".to_string(),
            );
        }
        if config.prettier {
            scripts.insert("lint-staged".to_string(), "lint-staged".to_string());
        }
        if config.husky {
            scripts.insert("prepare".to_string(), "husky".to_string());
        }
        self.scripts = scripts;

        if config.prettier {
            self.lint_staged = Some(serde_json::json!({
                "*.{js,jsx,ts,tsx,md,html,css}": ["prettier --write"],
            }));
        } else {
            self.lint_staged = None;
        }
    }
}
