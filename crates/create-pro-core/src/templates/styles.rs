//! Stylesheet and build-tool config renderers

use super::join_lines;
use crate::config::ProjectConfig;
use serde_json::json;

/// `src/index.css` - Tailwind entry sheet with the font variable
pub fn tailwind_css(config: &ProjectConfig) -> String {
    let family = config
        .effective_font()
        .and_then(|f| f.css_family())
        .map(|f| format!("\"{}\"", f))
        .unwrap_or_else(|| "sans-serif".to_string());
    let lines: Vec<String> = vec![
        "@import \"tailwindcss\";".into(),
        String::new(),
        ":root {".into(),
        format!("  --fontFamily: {};", family),
        "}".into(),
        String::new(),
        "body {".into(),
        "  font-family: var(--fontFamily);".into(),
        "}".into(),
    ];
    join_lines(&lines)
}

/// `vite.config.{js,ts}`
pub fn vite_config(config: &ProjectConfig) -> String {
    let mut lines: Vec<String> = vec![
        "import { defineConfig } from 'vite';".into(),
        "import react from '@vitejs/plugin-react';".into(),
    ];
    if config.tailwind {
        lines.push("import tailwindcss from '@tailwindcss/vite';".into());
        lines.push("import autoprefixer from 'autoprefixer';".into());
    }
    lines.push(String::new());
    lines.push("export default defineConfig({".into());
    if config.tailwind {
        lines.push("  plugins: [react(), tailwindcss(), autoprefixer()],".into());
    } else {
        lines.push("  plugins: [react()],".into());
    }
    lines.push("});".into());
    join_lines(&lines)
}

/// `tailwind.config.{js,ts}`
pub fn tailwind_config(config: &ProjectConfig) -> String {
    let globs = if config.language.is_typescript() {
        "ts,tsx"
    } else {
        "js,jsx"
    };
    let lines: Vec<String> = vec![
        "/** @type {import('tailwindcss').Config} */".into(),
        "export default {".into(),
        "  content: [".into(),
        "    \"./index.html\",".into(),
        format!("    \"./src/**/*.{{{}}}\",", globs),
        "  ],".into(),
        "  theme: {".into(),
        "    extend: {},".into(),
        "  },".into(),
        "  plugins: [],".into(),
        "};".into(),
    ];
    join_lines(&lines)
}

/// `components.json` - the shadcn/ui manifest
pub fn shadcn_manifest(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let value = json!({
        "style": "default",
        "tsx": is_ts,
        "tailwind": {
            "config": format!("tailwind.config.{}", config.language.config_ext()),
            "css": "src/index.css",
            "baseColor": "gray",
            "cssVariables": true,
        },
        "aliases": {
            "components": "src/components",
            "utils": "src/lib/utils",
        },
    });
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, FontChoice, Language};

    #[test]
    fn tailwind_css_defaults_to_sans_serif() {
        let mut config = base_config();
        config.tailwind = true;
        assert!(tailwind_css(&config).contains("--fontFamily: sans-serif;"));
    }

    #[test]
    fn tailwind_css_uses_chosen_font() {
        let mut config = base_config();
        config.tailwind = true;
        config.custom_fonts = true;
        config.font_choice = Some(FontChoice::Poppins);
        assert!(tailwind_css(&config).contains("--fontFamily: \"Poppins\";"));
    }

    #[test]
    fn vite_config_plugins_follow_tailwind_flag() {
        let mut config = base_config();
        assert!(vite_config(&config).contains("plugins: [react()],"));
        config.tailwind = true;
        let out = vite_config(&config);
        assert!(out.contains("import tailwindcss from '@tailwindcss/vite';"));
        assert!(out.contains("plugins: [react(), tailwindcss(), autoprefixer()],"));
    }

    #[test]
    fn tailwind_config_globs_follow_language() {
        let mut config = base_config();
        config.tailwind = true;
        assert!(tailwind_config(&config).contains("{js,jsx}"));
        config.language = Language::TypeScript;
        assert!(tailwind_config(&config).contains("{ts,tsx}"));
    }

    #[test]
    fn shadcn_manifest_is_valid_json() {
        let mut config = base_config();
        config.tailwind = true;
        config.shadcn = true;
        config.language = Language::TypeScript;
        let out = shadcn_manifest(&config);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["tsx"], true);
        assert_eq!(parsed["tailwind"]["config"], "tailwind.config.ts");
        assert_eq!(parsed["aliases"]["utils"], "src/lib/utils");
    }
}
