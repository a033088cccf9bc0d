//! Dependency derivation and installation
//!
//! `derive_dependencies` is the pure half: configuration in, two disjoint
//! package lists out. The install functions shell out to the configured
//! package manager, runtime batch first, dev batch second, each skipped when
//! empty.

use crate::config::{ApiHandler, Language, ProjectConfig};
use crate::process;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Runtime and development package lists implied by a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    pub runtime: Vec<&'static str>,
    pub dev: Vec<&'static str>,
}

/// Map a configuration to its feature-conditional package lists
///
/// Each rule is independent and additive; the base framework packages
/// (react, vite) are handled separately by `install_base_dependencies`.
pub fn derive_dependencies(config: &ProjectConfig) -> DependencySet {
    let mut runtime: Vec<&'static str> = vec!["react-router-dom", "react-error-boundary"];
    let mut dev: Vec<&'static str> = Vec::new();

    if config.state_manager {
        runtime.push("@reduxjs/toolkit");
        runtime.push("react-redux");
        if config.persist {
            runtime.push("redux-persist");
        }
    }
    if config.api_handler == ApiHandler::Axios {
        runtime.push("axios");
    }
    if config.tailwind {
        dev.extend(["tailwindcss", "@tailwindcss/vite", "autoprefixer"]);
    }
    if config.shadcn {
        runtime.push("clsx");
        runtime.push("tailwind-merge");
    }
    if config.husky {
        dev.push("husky");
    }
    if config.prettier {
        dev.push("prettier");
        dev.push("lint-staged");
    }
    if config.eslint {
        dev.extend([
            "eslint",
            "@eslint/js",
            "eslint-plugin-react",
            "eslint-plugin-react-hooks",
        ]);
        match config.language {
            Language::TypeScript => dev.push("@typescript-eslint/parser"),
            Language::JavaScript => {
                dev.push("@babel/eslint-parser");
                dev.push("@babel/preset-react");
            }
        }
    }

    DependencySet { runtime, dev }
}

/// Create the project directory and run `<pm> init -y` inside it
pub async fn initialize_project(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    fs::create_dir_all(project_dir)
        .await
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;

    let pm = config.package_manager;
    process::run_quiet_in_dir(pm.bin(), &["init", "-y"], project_dir)
        .await
        .context("Package manifest initialization failed")?;
    Ok(())
}

/// Install the base framework: react/react-dom, then vite and its plugin
///
/// TypeScript projects additionally get the compiler and the view library's
/// type declarations.
pub async fn install_base_dependencies(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let pm = config.package_manager;

    let mut runtime: Vec<&str> = vec!["react", "react-dom"];
    if config.language.is_typescript() {
        runtime.extend(["@types/react", "@types/react-dom"]);
    }
    let mut args: Vec<&str> = vec![pm.install_cmd()];
    args.extend(&runtime);
    process::run_in_dir(pm.bin(), &args, project_dir)
        .await
        .context("Failed to install React dependencies")?;

    let mut dev: Vec<&str> = vec!["vite", "@vitejs/plugin-react"];
    if config.language.is_typescript() {
        dev.push("typescript");
    }
    let mut args: Vec<&str> = vec![pm.install_cmd(), pm.dev_flag()];
    args.extend(&dev);
    process::run_in_dir(pm.bin(), &args, project_dir)
        .await
        .context("Failed to install Vite dev dependencies")?;

    Ok(())
}

/// Install the feature-conditional packages derived from the configuration
pub async fn install_dependencies(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let set = derive_dependencies(config);
    let pm = config.package_manager;

    if !set.runtime.is_empty() {
        let mut args: Vec<&str> = vec![pm.install_cmd()];
        args.extend(&set.runtime);
        process::run_in_dir(pm.bin(), &args, project_dir)
            .await
            .context("Failed to install runtime dependencies")?;
    }

    if !set.dev.is_empty() {
        let mut args: Vec<&str> = vec![pm.install_cmd(), pm.dev_flag()];
        args.extend(&set.dev);
        process::run_in_dir(pm.bin(), &args, project_dir)
            .await
            .context("Failed to install development dependencies")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, ShadcnComponent};

    #[test]
    fn bare_fetch_config_gets_exactly_the_base_pair() {
        let set = derive_dependencies(&base_config());
        assert_eq!(set.runtime, ["react-router-dom", "react-error-boundary"]);
        assert!(set.dev.is_empty());
    }

    #[test]
    fn axios_adds_the_http_client() {
        let mut config = base_config();
        config.api_handler = ApiHandler::Axios;
        let set = derive_dependencies(&config);
        assert!(set.runtime.contains(&"axios"));
    }

    #[test]
    fn state_manager_and_persist_stack_up() {
        let mut config = base_config();
        config.state_manager = true;
        let set = derive_dependencies(&config);
        assert!(set.runtime.contains(&"@reduxjs/toolkit"));
        assert!(set.runtime.contains(&"react-redux"));
        assert!(!set.runtime.contains(&"redux-persist"));

        config.persist = true;
        let set = derive_dependencies(&config);
        assert!(set.runtime.contains(&"redux-persist"));
    }

    #[test]
    fn tailwind_and_shadcn_split_between_lists() {
        let mut config = base_config();
        config.tailwind = true;
        config.shadcn = true;
        config.shadcn_components = vec![ShadcnComponent::Button];
        let set = derive_dependencies(&config);
        assert!(set.dev.contains(&"tailwindcss"));
        assert!(set.dev.contains(&"@tailwindcss/vite"));
        assert!(set.dev.contains(&"autoprefixer"));
        assert!(set.runtime.contains(&"clsx"));
        assert!(set.runtime.contains(&"tailwind-merge"));
    }

    #[test]
    fn eslint_parser_depends_on_language() {
        let mut config = base_config();
        config.eslint = true;
        let set = derive_dependencies(&config);
        assert!(set.dev.contains(&"@babel/eslint-parser"));
        assert!(set.dev.contains(&"@babel/preset-react"));
        assert!(!set.dev.contains(&"@typescript-eslint/parser"));

        config.language = Language::TypeScript;
        let set = derive_dependencies(&config);
        assert!(set.dev.contains(&"@typescript-eslint/parser"));
        assert!(!set.dev.contains(&"@babel/eslint-parser"));
    }

    #[test]
    fn tooling_flags_are_independent() {
        let mut config = base_config();
        config.husky = true;
        let set = derive_dependencies(&config);
        assert_eq!(set.dev, ["husky"]);

        config.husky = false;
        config.prettier = true;
        let set = derive_dependencies(&config);
        assert_eq!(set.dev, ["prettier", "lint-staged"]);
    }

    #[test]
    fn runtime_and_dev_lists_are_disjoint() {
        let mut config = base_config();
        config.state_manager = true;
        config.persist = true;
        config.api_handler = ApiHandler::Axios;
        config.tailwind = true;
        config.shadcn = true;
        config.husky = true;
        config.prettier = true;
        config.eslint = true;
        let set = derive_dependencies(&config);
        for pkg in &set.runtime {
            assert!(!set.dev.contains(pkg), "{pkg} appears in both lists");
        }
    }
}
