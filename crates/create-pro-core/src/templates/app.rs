//! Entry component, bootstrap file, and HTML shell

use super::join_lines;
use crate::config::ProjectConfig;

/// `src/App.{jsx,tsx}` - error boundary + suspense around the lazy route table
pub fn app_component(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = vec![
        "import React, { lazy, Suspense } from 'react';".into(),
        "import { ErrorBoundary } from 'react-error-boundary';".into(),
        "import ErrorFallback from './components/ErrorFallback';".into(),
        "const ProjectRoutes = lazy(() => import('./routes/ProjectRoutes'));".into(),
    ];
    if config.shadcn {
        lines.push("import { cn } from './lib/utils';".into());
    }
    if is_ts {
        lines.push("import type { FC } from 'react';".into());
    }
    lines.push(String::new());
    lines.push(if is_ts {
        "const App: FC = () => {".into()
    } else {
        "function App() {".into()
    });
    let loading_div = if config.tailwind {
        "<div className=\"text-center p-4\">Loading...</div>"
    } else {
        "<div>Loading...</div>"
    };
    lines.extend([
        "  return (".into(),
        "    <ErrorBoundary FallbackComponent={ErrorFallback} onError={(error, info) => console.error(\"Error:\", error, info)}>".into(),
        format!("      <Suspense fallback={{{}}}>", loading_div),
        "        <ProjectRoutes />".into(),
        "      </Suspense>".into(),
        "    </ErrorBoundary>".into(),
        "  );".into(),
    ]);
    lines.push(if is_ts { "};".into() } else { "}".into() });
    lines.push(String::new());
    lines.push("export default App;".into());
    join_lines(&lines)
}

/// `src/main.{jsx,tsx}` - ReactDOM root render with optional store wiring
pub fn bootstrap(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = vec![
        "import React from 'react';".into(),
        "import ReactDOM from 'react-dom/client';".into(),
        "import { BrowserRouter as Router } from 'react-router-dom';".into(),
        "import App from './App';".into(),
    ];
    if config.tailwind {
        lines.push("import './index.css';".into());
    }
    if config.state_manager {
        lines.push("import { Provider } from 'react-redux';".into());
        if config.persist {
            lines.push("import { store, persistor } from './store/store';".into());
            lines.push(
                "import { PersistGate } from 'redux-persist/integration/react';".into(),
            );
        } else {
            lines.push("import { store } from './store/store';".into());
        }
    }
    lines.push(String::new());
    let cast = if is_ts { " as HTMLDivElement" } else { "" };
    lines.push(format!(
        "const root = ReactDOM.createRoot(document.getElementById('root'){});",
        cast
    ));
    lines.push("root.render(".into());
    if config.state_manager {
        lines.push("  <Provider store={store}>".into());
    }
    if config.persist {
        lines.push("    <PersistGate loading={null} persistor={persistor}>".into());
    }
    lines.extend([
        "    <Router>".into(),
        "      <React.StrictMode>".into(),
        "        <App />".into(),
        "      </React.StrictMode>".into(),
        "    </Router>".into(),
    ]);
    if config.persist {
        lines.push("    </PersistGate>".into());
    }
    if config.state_manager {
        lines.push("  </Provider>".into());
    }
    lines.push(");".into());
    join_lines(&lines)
}

/// `index.html` - HTML shell, with a Google Fonts link when configured
pub fn index_html(config: &ProjectConfig) -> String {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".into(),
        "<html lang=\"en\">".into(),
        "  <head>".into(),
        "    <meta charset=\"UTF-8\">".into(),
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".into(),
    ];
    if let Some(font) = config.effective_font() {
        // family_query is Some for every non-None font
        if let Some(family) = font.family_query() {
            lines.push(format!(
                "    <link href=\"https://fonts.googleapis.com/css2?family={}:wght@400;700&display=swap\" rel=\"stylesheet\">",
                family
            ));
        }
    }
    lines.extend([
        "    <title>React App</title>".into(),
        "  </head>".into(),
        "  <body>".into(),
        "    <div id=\"root\"></div>".into(),
        format!(
            "    <script type=\"module\" src=\"/src/main.{}\"></script>",
            config.language.ext()
        ),
        "  </body>".into(),
        "</html>".into(),
    ]);
    join_lines(&lines)
}

/// `src/components/ErrorFallback.{jsx,tsx}`
pub fn error_fallback(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let tw = config.tailwind;
    let cls = |classes: &str| -> String {
        if tw {
            format!(" className=\"{}\"", classes)
        } else {
            String::new()
        }
    };

    let mut lines: Vec<String> = vec!["import React from 'react';".into()];
    if is_ts {
        lines.push("import type { FC } from 'react';".into());
        lines.push("import type { FallbackProps } from 'react-error-boundary';".into());
    }
    lines.push(String::new());
    lines.push(if is_ts {
        "const ErrorFallback: FC<FallbackProps> = ({ error }: FallbackProps) => {".into()
    } else {
        "const ErrorFallback = ({ error }) => {".into()
    });
    lines.extend([
        "  return (".into(),
        format!(
            "    <div{}>",
            cls("min-h-screen flex items-center justify-center bg-gray-100")
        ),
        format!(
            "      <div{}>",
            cls("bg-white p-6 rounded-lg shadow-lg text-center")
        ),
        format!(
            "        <h1{}>Something went wrong</h1>",
            cls("text-2xl font-bold mb-4 text-red-600")
        ),
        format!("        <p{}>{{error.message}}</p>", cls("text-gray-600")),
        format!(
            "        <p{}>Please try refreshing the page or contact support.</p>",
            cls("text-gray-600 mt-2")
        ),
        "      </div>".into(),
        "    </div>".into(),
        "  );".into(),
        "};".into(),
        String::new(),
        "export default ErrorFallback;".into(),
    ]);
    join_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, FontChoice, Language};

    #[test]
    fn app_component_minimal_has_no_optional_imports() {
        let out = app_component(&base_config());
        assert!(out.contains("function App()"));
        assert!(!out.contains("import { cn }"));
        assert!(!out.contains("import type"));
        assert!(!out.contains("className"));
    }

    #[test]
    fn app_component_typescript_uses_fc() {
        let mut config = base_config();
        config.language = Language::TypeScript;
        let out = app_component(&config);
        assert!(out.contains("import type { FC } from 'react';"));
        assert!(out.contains("const App: FC = () => {"));
    }

    #[test]
    fn bootstrap_wires_provider_and_persist_gate() {
        let mut config = base_config();
        config.state_manager = true;
        config.persist = true;
        let out = bootstrap(&config);
        assert!(out.contains("import { store, persistor } from './store/store';"));
        assert!(out.contains("<PersistGate loading={null} persistor={persistor}>"));
        // Nesting order: Provider wraps PersistGate wraps Router
        let provider = out.find("<Provider").unwrap();
        let gate = out.find("<PersistGate").unwrap();
        let router = out.find("<Router>").unwrap();
        assert!(provider < gate && gate < router);
    }

    #[test]
    fn bootstrap_without_store_is_plain() {
        let out = bootstrap(&base_config());
        assert!(!out.contains("react-redux"));
        assert!(!out.contains("PersistGate"));
        assert!(!out.contains("index.css"));
    }

    #[test]
    fn index_html_font_link_only_when_chosen() {
        let mut config = base_config();
        assert!(!index_html(&config).contains("fonts.googleapis.com"));

        config.custom_fonts = true;
        config.font_choice = Some(FontChoice::OpenSans);
        let out = index_html(&config);
        assert!(out.contains("family=Open+Sans:wght@400;700"));

        config.font_choice = Some(FontChoice::None);
        assert!(!index_html(&config).contains("fonts.googleapis.com"));
    }

    #[test]
    fn index_html_script_matches_language() {
        let mut config = base_config();
        assert!(index_html(&config).contains("/src/main.jsx"));
        config.language = Language::TypeScript;
        assert!(index_html(&config).contains("/src/main.tsx"));
    }

    #[test]
    fn renderers_are_deterministic() {
        let config = base_config();
        assert_eq!(app_component(&config), app_component(&config));
        assert_eq!(bootstrap(&config), bootstrap(&config));
        assert_eq!(index_html(&config), index_html(&config));
        assert_eq!(error_fallback(&config), error_fallback(&config));
    }
}
