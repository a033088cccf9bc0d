//! Tooling config renderers: TypeScript, ESLint, Prettier, gitignore

use super::join_lines;
use crate::config::ProjectConfig;
use serde_json::json;

/// `tsconfig.json`
pub fn tsconfig(_config: &ProjectConfig) -> String {
    let value = json!({
        "compilerOptions": {
            "target": "ESNext",
            "module": "ESNext",
            "moduleResolution": "node",
            "jsx": "react-jsx",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"],
    });
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
    out.push('\n');
    out
}

/// `eslint.config.js` - flat config; parser section varies by language
pub fn eslint_config(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = Vec::new();
    if is_ts {
        lines.push("import tsEslintParser from '@typescript-eslint/parser';".into());
    } else {
        lines.push("import babelEslintParser from '@babel/eslint-parser';".into());
    }
    lines.extend([
        "import eslint from '@eslint/js';".into(),
        "import reactPlugin from 'eslint-plugin-react';".into(),
        "import reactHooksPlugin from 'eslint-plugin-react-hooks';".into(),
        String::new(),
        "export default [".into(),
        "  eslint.configs.recommended,".into(),
        "  {".into(),
    ]);
    lines.push(if is_ts {
        "    files: ['**/*.{js,jsx,ts,tsx}'],".into()
    } else {
        "    files: ['**/*.{js,jsx}'],".into()
    });
    lines.extend([
        "    languageOptions: {".into(),
        format!(
            "      parser: {},",
            if is_ts {
                "tsEslintParser"
            } else {
                "babelEslintParser"
            }
        ),
        "      parserOptions: {".into(),
    ]);
    if is_ts {
        lines.push("        sourceType: 'module',".into());
        lines.push("        project: './tsconfig.json',".into());
    } else {
        lines.push("        requireConfigFile: false,".into());
        lines.push("        babelOptions: { presets: ['@babel/preset-react'] },".into());
    }
    lines.extend([
        "        ecmaVersion: 'latest',".into(),
        "        ecmaFeatures: {".into(),
        "          jsx: true,".into(),
        "        },".into(),
        "      },".into(),
        "      globals: {".into(),
        "        localStorage: true,".into(),
        "        window: true,".into(),
        "        document: true,".into(),
        "        console: true,".into(),
        "      },".into(),
        "    },".into(),
        "    plugins: {".into(),
        "      react: reactPlugin,".into(),
        "      'react-hooks': reactHooksPlugin,".into(),
        "    },".into(),
        "    settings: {".into(),
        "      react: {".into(),
        "        version: 'detect',".into(),
        "      },".into(),
        "    },".into(),
        "    rules: {".into(),
        "      ...reactPlugin.configs.recommended.rules,".into(),
        "      ...reactHooksPlugin.configs.recommended.rules,".into(),
        "      'react/prop-types': 'off',".into(),
    ]);
    if is_ts {
        lines.push("      '@typescript-eslint/no-explicit-any': 'off',".into());
    }
    lines.extend(["    },".into(), "  },".into(), "];".into()]);
    join_lines(&lines)
}

/// `.prettierrc`
pub fn prettier_config(_config: &ProjectConfig) -> String {
    let value = json!({
        "semi": true,
        "singleQuote": false,
        "trailingComma": "es5",
        "printWidth": 150,
        "proseWrap": "preserve",
        "bracketSpacing": true,
        "bracketSameLine": false,
        "tabWidth": 2,
        "arrowParens": "always",
    });
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
    out.push('\n');
    out
}

/// `.prettierignore`
pub fn prettier_ignore(_config: &ProjectConfig) -> String {
    let lines: Vec<&str> = vec![
        "# Dependencies",
        "node_modules/",
        "# Build output",
        "dist/",
        "dist-ssr/",
        "# Configuration files",
        "*.config.js",
        "*.config.ts",
        "tsconfig.json",
        ".prettierrc",
        "# Generated files",
        "*.min.js",
        "*.bundle.js",
        "# Logs",
        "*.log",
        "# Environment files",
        ".env",
        ".env.*",
        "# Lock files",
        "package-lock.json",
        "yarn.lock",
        "# Miscellaneous",
        "coverage/",
    ];
    join_lines(&lines)
}

/// `.gitignore`
pub fn gitignore(_config: &ProjectConfig) -> String {
    let lines: Vec<&str> = vec![
        "# Dependencies",
        "node_modules/",
        "# Build output",
        "dist/",
        "dist-ssr/",
        "# Logs",
        "logs/",
        "*.log",
        "npm-debug.log*",
        "yarn-debug.log*",
        "yarn-error.log*",
        "# Environment variables",
        ".env",
        ".env.local",
        ".env.development.local",
        ".env.test.local",
        ".env.production.local",
        "# Vite-specific",
        ".vite/",
        "vite.config.*.timestamp-*",
        "# Editor directories and files",
        ".idea/",
        ".vscode/",
        "*.suo",
        "*.ntvs*",
        "*.njsproj",
        "*.sln",
        "*.swp",
        "# OS-specific files",
        ".DS_Store",
        "Thumbs.db",
        "# Testing",
        "coverage/",
        "# Husky internals",
        ".husky/_/",
        "# Lock files",
        "package-lock.json",
        "yarn.lock",
        "# Miscellaneous",
        "*.bak",
        "*.tmp",
    ];
    join_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, Language};

    #[test]
    fn tsconfig_is_valid_json_with_strict_mode() {
        let out = tsconfig(&base_config());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["compilerOptions"]["strict"], true);
        assert_eq!(parsed["compilerOptions"]["jsx"], "react-jsx");
    }

    #[test]
    fn eslint_parser_follows_language() {
        let mut config = base_config();
        config.eslint = true;
        let out = eslint_config(&config);
        assert!(out.contains("@babel/eslint-parser"));
        assert!(out.contains("requireConfigFile: false,"));
        assert!(!out.contains("typescript-eslint"));

        config.language = Language::TypeScript;
        let out = eslint_config(&config);
        assert!(out.contains("@typescript-eslint/parser"));
        assert!(out.contains("project: './tsconfig.json',"));
        assert!(out.contains("'@typescript-eslint/no-explicit-any': 'off',"));
    }

    #[test]
    fn prettier_config_parses() {
        let parsed: serde_json::Value =
            serde_json::from_str(&prettier_config(&base_config())).unwrap();
        assert_eq!(parsed["tabWidth"], 2);
    }

    #[test]
    fn ignore_files_cover_dependencies_and_builds() {
        let config = base_config();
        for text in [prettier_ignore(&config), gitignore(&config)] {
            assert!(text.contains("node_modules/"));
            assert!(text.contains("dist/"));
        }
    }
}
