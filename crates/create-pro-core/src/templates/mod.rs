//! Template renderers
//!
//! Every generated file is the output of exactly one pure function
//! `(&ProjectConfig) -> String` in this tree. Renderers never touch the
//! filesystem; the structure builder and config file generator decide where
//! the text lands. Optional lines are composed as vectors and joined, so a
//! disabled feature removes whole lines instead of leaving gaps.

pub mod api;
pub mod app;
pub mod configs;
pub mod readme;
pub mod routes;
pub mod store;
pub mod styles;
pub mod ui;
pub mod views;

/// Join rendered lines into file content with a trailing newline
pub(crate) fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
