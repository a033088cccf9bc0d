//! Prerequisite detection
//!
//! Checks that the external collaborators the pipeline shells out to are
//! actually on PATH before any side effect happens.

pub mod check;

pub use check::{check_git, check_node, check_package_manager, check_prerequisites, RuntimeInfo};
