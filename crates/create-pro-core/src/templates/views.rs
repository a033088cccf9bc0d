//! Login page and dashboard view

use super::join_lines;
use crate::config::ProjectConfig;

/// Wrap a class list for JSX, routing through `cn()` when shadcn is enabled
fn class_attr(config: &ProjectConfig, classes: &str) -> String {
    if !config.tailwind {
        return String::new();
    }
    if config.shadcn {
        format!(" className={{cn(\"{}\")}}", classes)
    } else {
        format!(" className=\"{}\"", classes)
    }
}

/// `src/pages/Login.{jsx,tsx}`
pub fn login_page(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = vec!["import React from 'react';".into()];
    if config.shadcn {
        lines.push("import { cn } from '../lib/utils';".into());
    }
    if is_ts {
        lines.push("import type { FC } from 'react';".into());
    }
    lines.push(String::new());
    lines.push(if is_ts {
        "const Login: FC = () => {".into()
    } else {
        "const Login = () => {".into()
    });
    lines.push("  return (".into());
    lines.push(format!(
        "    <div{}>",
        class_attr(
            config,
            "min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-gray-100"
        )
    ));

    if config.tailwind {
        lines.extend([
            format!("      <div{}>", class_attr(config, "bg-white p-8 rounded-xl shadow-lg w-full max-w-md border border-gray-200")),
            format!("        <div{}>", class_attr(config, "text-center mb-8")),
            format!("          <h2{}>Welcome Back</h2>", class_attr(config, "text-3xl font-bold text-gray-900")),
            format!("          <p{}>Please sign in to continue</p>", class_attr(config, "text-gray-600 mt-2")),
            "        </div>".into(),
            "        <form>".into(),
            format!("          <div{}>", class_attr(config, "mb-6")),
            format!("            <label{} htmlFor=\"email\">Email Address</label>", class_attr(config, "block text-sm font-medium text-gray-700 mb-2")),
            format!("            <input type=\"email\" id=\"email\"{} placeholder=\"you@example.com\" />", class_attr(config, "w-full p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition")),
            "          </div>".into(),
            format!("          <div{}>", class_attr(config, "mb-6")),
            format!("            <label{} htmlFor=\"password\">Password</label>", class_attr(config, "block text-sm font-medium text-gray-700 mb-2")),
            format!("            <input type=\"password\" id=\"password\"{} placeholder=\"Enter your password\" />", class_attr(config, "w-full p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition")),
            "          </div>".into(),
            format!("          <button type=\"submit\"{}>Sign In</button>", class_attr(config, "w-full bg-blue-500 text-white py-3 px-4 rounded-lg font-medium text-lg hover:bg-blue-600 transition-all duration-200 shadow-md hover:shadow-lg transform hover:-translate-y-0.5")),
            "        </form>".into(),
            "      </div>".into(),
        ]);
    } else {
        lines.extend([
            "      <div>".into(),
            "        <h2>Welcome Back</h2>".into(),
            "        <form>".into(),
            "          <label htmlFor=\"email\">Email Address</label>".into(),
            "          <input type=\"email\" id=\"email\" placeholder=\"you@example.com\" />".into(),
            "          <label htmlFor=\"password\">Password</label>".into(),
            "          <input type=\"password\" id=\"password\" />".into(),
            "          <button type=\"submit\">Sign In</button>".into(),
            "        </form>".into(),
            "      </div>".into(),
        ]);
    }

    lines.extend([
        "    </div>".into(),
        "  );".into(),
        "};".into(),
        String::new(),
        "export default Login;".into(),
    ]);
    join_lines(&lines)
}

/// `src/components/Dashboard.{jsx,tsx}`
pub fn dashboard_view(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = vec!["import React from 'react';".into()];
    if config.shadcn {
        lines.push("import { cn } from '../lib/utils';".into());
    }
    if is_ts {
        lines.push("import type { FC } from 'react';".into());
    }
    lines.push(String::new());
    lines.push(if is_ts {
        "const Dashboard: FC = () => {".into()
    } else {
        "const Dashboard = () => {".into()
    });

    let item_type = if is_ts {
        "{ id: number; name: string; status: string }"
    } else {
        ""
    };
    if is_ts {
        lines.push(format!("  const sampleData: {}[] = [", item_type));
    } else {
        lines.push("  const sampleData = [".into());
    }
    lines.extend([
        "    { id: 1, name: 'Project A', status: 'Active' },".into(),
        "    { id: 2, name: 'Project B', status: 'Pending' },".into(),
        "    { id: 3, name: 'Project C', status: 'Completed' },".into(),
        "  ];".into(),
        String::new(),
        "  return (".into(),
    ]);

    if config.tailwind {
        lines.extend([
            format!("    <div{}>", class_attr(config, "min-h-screen p-6 bg-gray-100")),
            format!("      <h1{}>Dashboard</h1>", class_attr(config, "text-3xl font-bold mb-6")),
            format!("      <div{}>", class_attr(config, "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6")),
            "        {sampleData.map((item) => (".into(),
            format!("          <div key={{item.id}}{}>", class_attr(config, "bg-white p-4 rounded-lg shadow-md")),
            format!("            <h2{}>{{item.name}}</h2>", class_attr(config, "text-xl font-semibold")),
            format!("            <p{}>Status: {{item.status}}</p>", class_attr(config, "text-gray-600")),
            "          </div>".into(),
            "        ))}".into(),
            "      </div>".into(),
            "    </div>".into(),
        ]);
    } else {
        lines.extend([
            "    <div>".into(),
            "      <h1>Dashboard</h1>".into(),
            "      <ul>".into(),
            "        {sampleData.map((item) => (".into(),
            "          <li key={item.id}>".into(),
            "            {item.name} - {item.status}".into(),
            "          </li>".into(),
            "        ))}".into(),
            "      </ul>".into(),
            "    </div>".into(),
        ]);
    }

    lines.extend([
        "  );".into(),
        "};".into(),
        String::new(),
        "export default Dashboard;".into(),
    ]);
    join_lines(&lines)
}
