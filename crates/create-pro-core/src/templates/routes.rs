//! Route guards, route table, and the auth-state predicate module
//!
//! The guards never decide authentication themselves: they import
//! `isAuthenticated()` from a generated `utils/auth` module, which is the
//! seam the generated app is expected to replace with its real session
//! logic.

use super::join_lines;
use crate::config::ProjectConfig;

/// `src/utils/auth.{js,ts}` - the pluggable authentication predicate
pub fn auth_predicate(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let signature = if is_ts {
        "export function isAuthenticated(): boolean {"
    } else {
        "export function isAuthenticated() {"
    };
    let lines: Vec<String> = vec![
        "// Replace this predicate with your real session check.".into(),
        "// The route guards only ever call isAuthenticated().".into(),
        signature.into(),
        "  return localStorage.getItem('token') !== null;".into(),
        "}".into(),
    ];
    join_lines(&lines)
}

fn guard(config: &ProjectConfig, name: &str, condition: &str, redirect: &str) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = vec![
        "import React from 'react';".into(),
        "import { Navigate } from 'react-router-dom';".into(),
        "import { isAuthenticated } from '../utils/auth';".into(),
    ];
    if is_ts {
        lines.push("import type { ReactNode } from 'react';".into());
    }
    lines.push(String::new());
    let props = if is_ts {
        "{ children }: { children: ReactNode }"
    } else {
        "{ children }"
    };
    lines.extend([
        format!("const {} = ({}) => {{", name, props),
        format!(
            "  return {} ? children : <Navigate to=\"{}\" />;",
            condition, redirect
        ),
        "};".into(),
        String::new(),
        format!("export default {};", name),
    ]);
    join_lines(&lines)
}

/// `src/routes/PrivateRoutes.{jsx,tsx}` - lets authenticated users through
pub fn private_routes(config: &ProjectConfig) -> String {
    guard(config, "PrivateRoutes", "isAuthenticated()", "/login")
}

/// `src/routes/PublicRoutes.{jsx,tsx}` - keeps authenticated users out
pub fn public_routes(config: &ProjectConfig) -> String {
    guard(config, "PublicRoutes", "!isAuthenticated()", "/")
}

/// `src/routes/ProjectRoutes.{jsx,tsx}` - the route table
///
/// With authentication the dashboard sits behind `PrivateRoutes` and a login
/// route exists behind `PublicRoutes`; without it the table is flat.
pub fn project_routes(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let tw = |classes: &str| -> String {
        if config.tailwind {
            format!(" className=\"{}\"", classes)
        } else {
            String::new()
        }
    };

    let mut lines: Vec<String> = vec![
        "import React from 'react';".into(),
        "import { Routes, Route } from 'react-router-dom';".into(),
    ];
    if config.authentication {
        lines.push("import PrivateRoutes from './PrivateRoutes';".into());
        lines.push("import PublicRoutes from './PublicRoutes';".into());
        lines.push("import Login from '../pages/Login';".into());
    }
    if config.wants_dashboard() {
        lines.push("import Dashboard from '../components/Dashboard';".into());
    }
    if is_ts {
        lines.push("import type { FC } from 'react';".into());
    }
    lines.push(String::new());
    lines.push(if is_ts {
        "const ProjectRoutes: FC = () => {".into()
    } else {
        "const ProjectRoutes = () => {".into()
    });
    lines.push("  return (".into());
    lines.push("    <Routes>".into());

    let home_element = if config.wants_dashboard() {
        "<Dashboard />".to_string()
    } else {
        format!("<div{}>Home</div>", tw("text-center p-4"))
    };
    let profile_element = format!("<div{}>Profile</div>", tw("text-center p-4"));
    let not_found_element = format!("<div{}>404 Not Found</div>", tw("text-center p-4"));

    if config.authentication {
        lines.extend(wrapped_route("/", &home_element, "PrivateRoutes"));
        lines.extend(wrapped_route("/profile", &profile_element, "PrivateRoutes"));
        lines.extend(wrapped_route("/login", "<Login />", "PublicRoutes"));
        lines.extend(wrapped_route("*", &not_found_element, "PublicRoutes"));
    } else {
        lines.push(format!(
            "      <Route path=\"/\" element={{{}}} />",
            home_element
        ));
        lines.push(format!(
            "      <Route path=\"/profile\" element={{{}}} />",
            profile_element
        ));
        lines.push(format!(
            "      <Route path=\"*\" element={{{}}} />",
            not_found_element
        ));
    }

    lines.extend([
        "    </Routes>".into(),
        "  );".into(),
        "};".into(),
        String::new(),
        "export default ProjectRoutes;".into(),
    ]);
    join_lines(&lines)
}

fn wrapped_route(path: &str, element: &str, guard: &str) -> Vec<String> {
    vec![
        "      <Route".into(),
        format!("        path=\"{}\"", path),
        "        element={".into(),
        format!("          <{}>", guard),
        format!("            {}", element),
        format!("          </{}>", guard),
        "        }".into(),
        "      />".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, Language, Template};

    #[test]
    fn guards_use_the_predicate_not_a_literal() {
        let mut config = base_config();
        config.authentication = true;
        let private = private_routes(&config);
        let public = public_routes(&config);
        assert!(private.contains("import { isAuthenticated } from '../utils/auth';"));
        assert!(private.contains("isAuthenticated() ? children"));
        assert!(public.contains("!isAuthenticated() ? children"));
        assert!(!private.contains("false ?"));
    }

    #[test]
    fn auth_predicate_typescript_annotates_return() {
        let mut config = base_config();
        config.language = Language::TypeScript;
        assert!(auth_predicate(&config).contains("isAuthenticated(): boolean"));
        config.language = Language::JavaScript;
        assert!(auth_predicate(&config).contains("isAuthenticated() {"));
    }

    #[test]
    fn route_table_without_auth_is_flat() {
        let out = project_routes(&base_config());
        assert!(!out.contains("PrivateRoutes"));
        assert!(!out.contains("Login"));
        assert!(out.contains("<Route path=\"/\" element={<div>Home</div>} />"));
        assert!(out.contains("404 Not Found"));
    }

    #[test]
    fn route_table_with_auth_guards_everything() {
        let mut config = base_config();
        config.authentication = true;
        let out = project_routes(&config);
        assert!(out.contains("import PrivateRoutes from './PrivateRoutes';"));
        assert!(out.contains("import Login from '../pages/Login';"));
        assert!(out.contains("import Dashboard from '../components/Dashboard';"));
        assert!(out.contains("<PrivateRoutes>"));
        assert!(out.contains("<PublicRoutes>"));
    }

    #[test]
    fn dashboard_template_routes_to_dashboard_without_auth() {
        let mut config = base_config();
        config.template = Template::Dashboard;
        let out = project_routes(&config);
        assert!(out.contains("import Dashboard from '../components/Dashboard';"));
        assert!(out.contains("element={<Dashboard />}"));
        assert!(!out.contains("PrivateRoutes"));
    }
}
