//! Config file generator
//!
//! Writes the flag-gated auxiliary files (bundler, type-checker, CSS
//! framework, formatter, linter, ignore files), rewrites the package
//! manifest, and runs the git/husky setup commands.

use crate::config::ProjectConfig;
use crate::manifest::PackageManifest;
use crate::process;
use crate::templates::{configs, readme, styles};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Write all auxiliary config artifacts and update `package.json`
pub async fn generate_config_files(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let config_ext = config.language.config_ext();

    fs::write(
        project_dir.join(format!("vite.config.{}", config_ext)),
        styles::vite_config(config),
    )
    .await
    .context("Failed to write vite config")?;

    if config.language.is_typescript() {
        fs::write(project_dir.join("tsconfig.json"), configs::tsconfig(config))
            .await
            .context("Failed to write tsconfig.json")?;
    }

    if config.tailwind {
        fs::write(
            project_dir.join(format!("tailwind.config.{}", config_ext)),
            styles::tailwind_config(config),
        )
        .await
        .context("Failed to write tailwind config")?;
    }

    if config.shadcn {
        fs::write(
            project_dir.join("components.json"),
            styles::shadcn_manifest(config),
        )
        .await
        .context("Failed to write components.json")?;
    }

    if config.prettier {
        fs::write(
            project_dir.join(".prettierrc"),
            configs::prettier_config(config),
        )
        .await
        .context("Failed to write .prettierrc")?;
        fs::write(
            project_dir.join(".prettierignore"),
            configs::prettier_ignore(config),
        )
        .await
        .context("Failed to write .prettierignore")?;
    }

    if config.eslint {
        fs::write(
            project_dir.join("eslint.config.js"),
            configs::eslint_config(config),
        )
        .await
        .context("Failed to write eslint config")?;
    }

    if config.git_init {
        initialize_git(project_dir, config).await?;
    }

    update_manifest(project_dir, config).await?;

    Ok(())
}

/// `git init` plus the ignore file
async fn initialize_git(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    process::run_quiet_in_dir("git", &["init"], project_dir)
        .await
        .context("git init failed")?;
    fs::write(project_dir.join(".gitignore"), configs::gitignore(config))
        .await
        .context("Failed to write .gitignore")?;
    Ok(())
}

/// Read-modify-write `package.json`, then bootstrap husky when requested
async fn update_manifest(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    if config.husky {
        setup_husky(project_dir, config).await?;
    }

    let mut manifest = PackageManifest::load(project_dir).await?;
    manifest.apply_config(config);
    manifest.save(project_dir).await?;

    Ok(())
}

/// `npx husky init`, then overwrite the pre-commit hook with our command set
async fn setup_husky(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    process::run_quiet_in_dir("npx", &["husky", "init"], project_dir)
        .await
        .context("husky initialization failed")?;

    let hook = pre_commit_hook(config);
    let hook_path = project_dir.join(".husky").join("pre-commit");
    fs::write(&hook_path, hook)
        .await
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;
    Ok(())
}

/// Hook body: lint-staged before lint when prettier is enabled
fn pre_commit_hook(config: &ProjectConfig) -> String {
    let run = config.package_manager.run_prefix();
    if config.prettier {
        format!("{} lint-staged\n{} lint\n", run, run)
    } else {
        format!("{} lint\n", run)
    }
}

/// Write the generated project's README
pub async fn generate_readme(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    fs::write(project_dir.join("README.md"), readme::readme(config))
        .await
        .context("Failed to write README.md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, Language, PackageManager};

    #[test]
    fn pre_commit_hook_varies_with_prettier() {
        let mut config = base_config();
        config.husky = true;
        assert_eq!(pre_commit_hook(&config), "npm run lint\n");

        config.prettier = true;
        assert_eq!(pre_commit_hook(&config), "npm run lint-staged\nnpm run lint\n");

        config.package_manager = PackageManager::Yarn;
        assert_eq!(pre_commit_hook(&config), "yarn lint-staged\nyarn lint\n");
    }

    #[tokio::test]
    async fn gated_files_follow_their_flags() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("package.json"), "{}")
            .await
            .unwrap();

        let mut config = base_config();
        config.language = Language::TypeScript;
        config.tailwind = true;
        config.prettier = true;
        config.eslint = true;
        generate_config_files(dir.path(), &config).await.unwrap();

        assert!(dir.path().join("vite.config.ts").exists());
        assert!(dir.path().join("tsconfig.json").exists());
        assert!(dir.path().join("tailwind.config.ts").exists());
        assert!(dir.path().join(".prettierrc").exists());
        assert!(dir.path().join(".prettierignore").exists());
        assert!(dir.path().join("eslint.config.js").exists());
        assert!(!dir.path().join("components.json").exists());
        assert!(!dir.path().join(".gitignore").exists());
    }

    #[tokio::test]
    async fn minimal_config_writes_only_vite_config() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("package.json"), "{}")
            .await
            .unwrap();

        generate_config_files(dir.path(), &base_config())
            .await
            .unwrap();

        assert!(dir.path().join("vite.config.js").exists());
        assert!(!dir.path().join("tsconfig.json").exists());
        assert!(!dir.path().join("tailwind.config.js").exists());
        assert!(!dir.path().join(".prettierrc").exists());
        assert!(!dir.path().join("eslint.config.js").exists());

        // Manifest got the base script triplet
        let manifest = PackageManifest::load(dir.path()).await.unwrap();
        let keys: Vec<&str> = manifest.scripts.keys().map(String::as_str).collect();
        assert_eq!(keys, ["build", "dev", "preview"]);
    }

    #[tokio::test]
    async fn readme_lands_in_the_project_root() {
        let dir = tempfile::tempdir().unwrap();
        generate_readme(dir.path(), &base_config()).await.unwrap();
        let content = tokio::fs::read_to_string(dir.path().join("README.md"))
            .await
            .unwrap();
        assert!(content.starts_with("# my-pro-app"));
    }
}
