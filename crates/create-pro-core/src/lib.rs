//! Create Pro Core - library behind the `create-pro-app` scaffolding CLI
//!
//! This library turns a validated [`ProjectConfig`] into a working React
//! project on disk: directory skeleton, source files rendered from pure
//! template functions, a `package.json` with the right scripts, and
//! dependencies installed through the user's package manager.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure functions** - template renderers (`templates`) and
//!   dependency derivation (`deps::derive_dependencies`), all `(config) -> value`
//!   with no side effects
//! - **Layer 2: Pipeline stages** - structure builder, installer, config file
//!   generator, manifest mutation, sequenced by `project::create_project`
//! - **Layer 3: CLI/TUI Interface** - optional cliclack-based interview
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interview module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use create_pro_core::{config::ProjectConfig, deps, templates};
//!
//! let config: ProjectConfig = /* assembled elsewhere */;
//! config.validate()?;
//! let set = deps::derive_dependencies(&config);
//! let app = templates::app::app_component(&config);
//! ```

pub mod config;
pub mod configfiles;
pub mod deps;
pub mod manifest;
pub mod process;
pub mod project;
pub mod runtime;
pub mod structure;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{
    ApiHandler, FontChoice, Language, PackageManager, ProjectConfig, ShadcnComponent, Template,
};
pub use deps::{derive_dependencies, DependencySet};
pub use process::CommandError;
pub use project::create_project;

#[cfg(feature = "tui")]
pub use tui::run;
