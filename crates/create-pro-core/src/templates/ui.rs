//! Shadcn UI scaffolding: the cn() helper and the selected components

use super::join_lines;
use crate::config::{ProjectConfig, ShadcnComponent};

/// `src/lib/utils.{jsx,tsx}` - the class-name-merging helper
pub fn cn_utils(config: &ProjectConfig) -> String {
    let is_ts = config.language.is_typescript();
    let mut lines: Vec<String> = vec![
        "import clsx from 'clsx';".into(),
        "import { twMerge } from 'tailwind-merge';".into(),
    ];
    if is_ts {
        lines.push("import type { ClassValue } from 'clsx';".into());
    }
    lines.push(String::new());
    lines.push(if is_ts {
        "export function cn(...inputs: ClassValue[]) {".into()
    } else {
        "export function cn(...inputs) {".into()
    });
    lines.push("  return twMerge(clsx(inputs));".into());
    lines.push("}".into());
    join_lines(&lines)
}

/// Render one selected component file
pub fn component(config: &ProjectConfig, component: ShadcnComponent) -> String {
    match component {
        ShadcnComponent::Button => button(config),
        ShadcnComponent::Input => input(config),
        ShadcnComponent::Card => card(config),
    }
}

fn forward_ref_args(config: &ProjectConfig) -> &'static str {
    // TS variant keeps the props loose; shadcn's real components type these
    // per-element, which is out of scope for a scaffold.
    if config.language.is_typescript() {
        "({ className, ...props }: any, ref: any)"
    } else {
        "({ className, ...props }, ref)"
    }
}

/// `src/components/ui/button.{jsx,tsx}`
pub fn button(config: &ProjectConfig) -> String {
    let lines: Vec<String> = vec![
        "import * as React from 'react';".into(),
        "import { cn } from '../../lib/utils';".into(),
        String::new(),
        format!(
            "const Button = React.forwardRef({} => {{",
            forward_ref_args(config)
        ),
        "  return (".into(),
        "    <button".into(),
        "      className={cn(".into(),
        "        'inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none',".into(),
        "        'bg-primary text-primary-foreground hover:bg-primary/90 h-10 py-2 px-4',".into(),
        "        className".into(),
        "      )}".into(),
        "      ref={ref}".into(),
        "      {...props}".into(),
        "    />".into(),
        "  );".into(),
        "});".into(),
        "Button.displayName = 'Button';".into(),
        String::new(),
        "export { Button };".into(),
    ];
    join_lines(&lines)
}

/// `src/components/ui/input.{jsx,tsx}`
pub fn input(config: &ProjectConfig) -> String {
    let args = if config.language.is_typescript() {
        "({ className, type, ...props }: any, ref: any)"
    } else {
        "({ className, type, ...props }, ref)"
    };
    let lines: Vec<String> = vec![
        "import * as React from 'react';".into(),
        "import { cn } from '../../lib/utils';".into(),
        String::new(),
        format!("const Input = React.forwardRef({} => {{", args),
        "  return (".into(),
        "    <input".into(),
        "      type={type}".into(),
        "      className={cn(".into(),
        "        'flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50',".into(),
        "        className".into(),
        "      )}".into(),
        "      ref={ref}".into(),
        "      {...props}".into(),
        "    />".into(),
        "  );".into(),
        "});".into(),
        "Input.displayName = 'Input';".into(),
        String::new(),
        "export { Input };".into(),
    ];
    join_lines(&lines)
}

/// `src/components/ui/card.{jsx,tsx}`
pub fn card(config: &ProjectConfig) -> String {
    let args = forward_ref_args(config);
    let lines: Vec<String> = vec![
        "import * as React from 'react';".into(),
        "import { cn } from '../../lib/utils';".into(),
        String::new(),
        format!("const Card = React.forwardRef({} => (", args),
        "  <div".into(),
        "    ref={ref}".into(),
        "    className={cn('rounded-lg border bg-card text-card-foreground shadow-sm', className)}".into(),
        "    {...props}".into(),
        "  />".into(),
        "));".into(),
        "Card.displayName = 'Card';".into(),
        String::new(),
        format!("const CardHeader = React.forwardRef({} => (", args),
        "  <div ref={ref} className={cn('flex flex-col space-y-1.5 p-6', className)} {...props} />".into(),
        "));".into(),
        "CardHeader.displayName = 'CardHeader';".into(),
        String::new(),
        format!("const CardTitle = React.forwardRef({} => (", args),
        "  <h3".into(),
        "    ref={ref}".into(),
        "    className={cn('text-2xl font-semibold leading-none tracking-tight', className)}".into(),
        "    {...props}".into(),
        "  />".into(),
        "));".into(),
        "CardTitle.displayName = 'CardTitle';".into(),
        String::new(),
        format!("const CardContent = React.forwardRef({} => (", args),
        "  <div ref={ref} className={cn('p-6 pt-0', className)} {...props} />".into(),
        "));".into(),
        "CardContent.displayName = 'CardContent';".into(),
        String::new(),
        "export { Card, CardHeader, CardTitle, CardContent };".into(),
    ];
    join_lines(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{base_config, Language};

    #[test]
    fn cn_utils_typescript_types_inputs() {
        let mut config = base_config();
        config.language = Language::TypeScript;
        let out = cn_utils(&config);
        assert!(out.contains("inputs: ClassValue[]"));
        assert!(out.contains("import type { ClassValue } from 'clsx';"));

        config.language = Language::JavaScript;
        let out = cn_utils(&config);
        assert!(out.contains("export function cn(...inputs) {"));
        assert!(!out.contains("ClassValue"));
    }

    #[test]
    fn each_component_renders_its_export() {
        let config = base_config();
        assert!(component(&config, ShadcnComponent::Button).contains("export { Button };"));
        assert!(component(&config, ShadcnComponent::Input).contains("export { Input };"));
        assert!(component(&config, ShadcnComponent::Card)
            .contains("export { Card, CardHeader, CardTitle, CardContent };"));
    }

    #[test]
    fn components_import_the_cn_helper() {
        let config = base_config();
        for c in ShadcnComponent::ALL {
            assert!(component(&config, c).contains("import { cn } from '../../lib/utils';"));
        }
    }
}
