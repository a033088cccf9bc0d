//! Configuration model driving the whole pipeline
//!
//! A [`ProjectConfig`] is assembled once by the interview (or by hand in
//! tests), validated, and then passed by shared reference to every stage.
//! Nothing downstream re-validates it.

use anyhow::{ensure, Result};
use serde::Serialize;
use std::fmt;

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Language::TypeScript)
    }

    /// Extension for React component files
    pub fn ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "jsx",
            Language::TypeScript => "tsx",
        }
    }

    /// Extension for plain config/module files (vite.config, tailwind.config)
    pub fn config_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Package manager used for init and installs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Binary name as invoked on PATH
    pub fn bin(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Subcommand that adds packages
    pub fn install_cmd(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn => "add",
        }
    }

    /// Flag that targets devDependencies
    pub fn dev_flag(&self) -> &'static str {
        match self {
            PackageManager::Npm => "--save-dev",
            PackageManager::Yarn => "-D",
        }
    }

    /// Prefix for running a package.json script, e.g. "npm run dev" / "yarn dev"
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bin())
    }
}

/// Project template flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Template {
    Minimal,
    Dashboard,
}

impl Template {
    pub fn display_name(&self) -> &'static str {
        match self {
            Template::Minimal => "Minimal",
            Template::Dashboard => "Dashboard",
        }
    }
}

/// API client style for the generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiHandler {
    Axios,
    Fetch,
}

impl ApiHandler {
    pub fn display_name(&self) -> &'static str {
        match self {
            ApiHandler::Axios => "Axios",
            ApiHandler::Fetch => "Fetch",
        }
    }
}

/// Google-Fonts choices offered by the interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontChoice {
    Roboto,
    Inter,
    Poppins,
    OpenSans,
    Lato,
    None,
}

impl FontChoice {
    pub const ALL: [FontChoice; 6] = [
        FontChoice::Roboto,
        FontChoice::Inter,
        FontChoice::Poppins,
        FontChoice::OpenSans,
        FontChoice::Lato,
        FontChoice::None,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FontChoice::Roboto => "Roboto",
            FontChoice::Inter => "Inter",
            FontChoice::Poppins => "Poppins",
            FontChoice::OpenSans => "Open Sans",
            FontChoice::Lato => "Lato",
            FontChoice::None => "None",
        }
    }

    /// Family name as used in the Google Fonts URL (spaces become `+`)
    pub fn family_query(&self) -> Option<&'static str> {
        match self {
            FontChoice::Roboto => Some("Roboto"),
            FontChoice::Inter => Some("Inter"),
            FontChoice::Poppins => Some("Poppins"),
            FontChoice::OpenSans => Some("Open+Sans"),
            FontChoice::Lato => Some("Lato"),
            FontChoice::None => None,
        }
    }

    /// CSS font-family value
    pub fn css_family(&self) -> Option<&'static str> {
        match self {
            FontChoice::Roboto => Some("Roboto"),
            FontChoice::Inter => Some("Inter"),
            FontChoice::Poppins => Some("Poppins"),
            FontChoice::OpenSans => Some("Open Sans"),
            FontChoice::Lato => Some("Lato"),
            FontChoice::None => None,
        }
    }
}

/// Shadcn UI components the interview can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShadcnComponent {
    Button,
    Input,
    Card,
}

impl ShadcnComponent {
    pub const ALL: [ShadcnComponent; 3] = [
        ShadcnComponent::Button,
        ShadcnComponent::Input,
        ShadcnComponent::Card,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ShadcnComponent::Button => "Button",
            ShadcnComponent::Input => "Input",
            ShadcnComponent::Card => "Card",
        }
    }

    /// Generated file stem under src/components/ui/
    pub fn file_stem(&self) -> &'static str {
        match self {
            ShadcnComponent::Button => "button",
            ShadcnComponent::Input => "input",
            ShadcnComponent::Card => "card",
        }
    }
}

/// The validated record of all user choices
///
/// Conditional fields (`persist`, `font_choice`, `shadcn`, `shadcn_components`)
/// are only meaningful when their governing field allows them; `validate`
/// enforces that before the record is handed to the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub language: Language,
    pub package_manager: PackageManager,
    pub template: Template,
    pub authentication: bool,
    pub state_manager: bool,
    pub persist: bool,
    pub api_handler: ApiHandler,
    pub tailwind: bool,
    pub custom_fonts: bool,
    pub font_choice: Option<FontChoice>,
    pub shadcn: bool,
    pub shadcn_components: Vec<ShadcnComponent>,
    pub git_init: bool,
    pub husky: bool,
    pub prettier: bool,
    pub eslint: bool,
}

impl ProjectConfig {
    /// Check the cross-field invariants the interview must uphold
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.project_name.trim().is_empty(),
            "Project name must not be empty"
        );
        ensure!(
            !self.persist || self.state_manager,
            "State persistence requires the state manager"
        );
        ensure!(
            self.custom_fonts || self.font_choice.is_none(),
            "A font choice is only valid when custom fonts are enabled"
        );
        ensure!(
            !self.shadcn || self.tailwind,
            "Shadcn UI requires Tailwind CSS"
        );
        ensure!(
            self.shadcn || self.shadcn_components.is_empty(),
            "Shadcn components are only valid when Shadcn UI is enabled"
        );
        Ok(())
    }

    /// The effective font, once both gates are applied
    pub fn effective_font(&self) -> Option<FontChoice> {
        if !self.custom_fonts {
            return None;
        }
        self.font_choice.filter(|f| *f != FontChoice::None)
    }

    /// Dashboard view is generated for the Dashboard template and whenever
    /// authentication is on (the route table links to it)
    pub fn wants_dashboard(&self) -> bool {
        self.template == Template::Dashboard || self.authentication
    }
}

/// All-gates-off JavaScript/npm configuration used as a baseline in tests
#[cfg(test)]
pub(crate) fn base_config() -> ProjectConfig {
    ProjectConfig {
        project_name: "my-pro-app".to_string(),
        language: Language::JavaScript,
        package_manager: PackageManager::Npm,
        template: Template::Minimal,
        authentication: false,
        state_manager: false,
        persist: false,
        api_handler: ApiHandler::Fetch,
        tailwind: false,
        custom_fonts: false,
        font_choice: None,
        shadcn: false,
        shadcn_components: Vec::new(),
        git_init: false,
        husky: false,
        prettier: false,
        eslint: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_base_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_project_name_rejected() {
        let mut config = base_config();
        config.project_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn persist_without_state_manager_rejected() {
        let mut config = base_config();
        config.persist = true;
        assert!(config.validate().is_err());

        config.state_manager = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn font_choice_without_custom_fonts_rejected() {
        let mut config = base_config();
        config.font_choice = Some(FontChoice::Inter);
        assert!(config.validate().is_err());

        config.custom_fonts = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shadcn_without_tailwind_rejected() {
        let mut config = base_config();
        config.shadcn = true;
        assert!(config.validate().is_err());

        config.tailwind = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn shadcn_components_without_shadcn_rejected() {
        let mut config = base_config();
        config.shadcn_components = vec![ShadcnComponent::Button];
        assert!(config.validate().is_err());
    }

    #[test]
    fn effective_font_applies_both_gates() {
        let mut config = base_config();
        assert_eq!(config.effective_font(), None);

        config.custom_fonts = true;
        config.font_choice = Some(FontChoice::None);
        assert_eq!(config.effective_font(), None);

        config.font_choice = Some(FontChoice::OpenSans);
        assert_eq!(config.effective_font(), Some(FontChoice::OpenSans));
        assert_eq!(FontChoice::OpenSans.family_query(), Some("Open+Sans"));
    }

    #[test]
    fn dashboard_gating() {
        let mut config = base_config();
        assert!(!config.wants_dashboard());

        config.template = Template::Dashboard;
        assert!(config.wants_dashboard());

        config.template = Template::Minimal;
        config.authentication = true;
        assert!(config.wants_dashboard());
    }
}
