//! README renderer for the generated project

use super::join_lines;
use crate::config::ProjectConfig;

/// `README.md` - feature list, getting-started, and script reference
pub fn readme(config: &ProjectConfig) -> String {
    let run = config.package_manager.run_prefix();
    let install = match config.package_manager.bin() {
        "npm" => "npm install",
        _ => "yarn install",
    };

    let mut lines: Vec<String> = vec![
        format!("# {}", config.project_name),
        String::new(),
        "A professional React application generated with `create-pro-app`.".into(),
        String::new(),
        "## Features".into(),
        String::new(),
        format!("- **Language**: {}", config.language.display_name()),
        format!("- **Template**: {}", config.template.display_name()),
    ];
    if config.authentication {
        lines.push("- Authentication with protected routes and a login page".into());
    }
    if config.state_manager {
        if config.persist {
            lines.push("- **State Management**: Redux Toolkit with persistence".into());
        } else {
            lines.push("- **State Management**: Redux Toolkit".into());
        }
    }
    lines.push(format!(
        "- **API Handler**: {}",
        config.api_handler.display_name()
    ));
    if config.tailwind {
        lines.push("- Tailwind CSS for styling".into());
    }
    if let Some(font) = config.effective_font() {
        lines.push(format!("- Custom Font: {}", font.display_name()));
    }
    if config.shadcn {
        lines.push("- Shadcn UI components".into());
    }
    if config.husky {
        lines.push("- Husky for git hooks".into());
    }
    if config.prettier {
        lines.push("- Prettier for code formatting".into());
    }
    if config.eslint {
        lines.push("- ESLint for linting".into());
    }

    lines.extend([
        String::new(),
        "## Getting Started".into(),
        String::new(),
        "1. Install dependencies:".into(),
        String::new(),
        "   ```bash".into(),
        format!("   {}", install),
        "   ```".into(),
        String::new(),
        "2. Start the development server:".into(),
        String::new(),
        "   ```bash".into(),
        format!("   {} dev", run),
        "   ```".into(),
        String::new(),
        "3. Open [http://localhost:5173](http://localhost:5173) in your browser.".into(),
        String::new(),
        "## Scripts".into(),
        String::new(),
        format!("- `{} dev`: Start the development server", run),
        format!("- `{} build`: Build for production", run),
        format!("- `{} preview`: Preview the production build", run),
    ]);
    if config.eslint {
        lines.push(format!("- `{} lint`: Run ESLint", run));
    }
    if config.prettier {
        lines.push(format!("- `{} lint-staged`: Run lint-staged", run));
    }

    if config.authentication {
        lines.extend([
            String::new(),
            "## Authentication".into(),
            String::new(),
            "- A login page is available at `/login`.".into(),
            "- Routes are guarded by the `isAuthenticated()` predicate in `src/utils/auth`;".into(),
            "  replace its body with your real session check.".into(),
        ]);
    }

    join_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, PackageManager};

    #[test]
    fn readme_minimal_lists_only_base_scripts() {
        let out = readme(&base_config());
        assert!(out.contains("# my-pro-app"));
        assert!(out.contains("`npm run dev`"));
        assert!(!out.contains("lint"));
        assert!(!out.contains("## Authentication"));
    }

    #[test]
    fn readme_yarn_commands() {
        let mut config = base_config();
        config.package_manager = PackageManager::Yarn;
        let out = readme(&config);
        assert!(out.contains("yarn install"));
        assert!(out.contains("`yarn dev`"));
        assert!(!out.contains("npm run"));
    }

    #[test]
    fn readme_documents_the_auth_seam() {
        let mut config = base_config();
        config.authentication = true;
        let out = readme(&config);
        assert!(out.contains("## Authentication"));
        assert!(out.contains("isAuthenticated()"));
    }
}
