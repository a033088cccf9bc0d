//! External command invocation
//!
//! Every process boundary of the pipeline (package manager, git, npx) goes
//! through [`run_in_dir`]. Output is inherited so the user sees installer
//! progress directly; a non-zero exit aborts the whole run. No retries and
//! no timeout are applied - the tool is one-shot.

use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Failure modes of an external command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{program}` could not be started: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}{stderr}")]
    Failed {
        command: String,
        status: String,
        /// Pre-formatted tail of captured stderr, empty when output was inherited
        stderr: String,
    },
}

/// Last non-blank stderr lines, formatted as an error message suffix
fn stderr_tail(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let tail = &lines[lines.len().saturating_sub(3)..];
    if tail.is_empty() {
        String::new()
    } else {
        format!(":\n{}", tail.join("\n"))
    }
}

/// Run `program args...` inside `dir`, failing on any non-zero exit
pub async fn run_in_dir(program: &str, args: &[&str], dir: &Path) -> Result<(), CommandError> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            command: format!("{} {}", program, args.join(" ")),
            status: status
                .code()
                .map(|c| format!("exit code {}", c))
                .unwrap_or_else(|| "a signal".to_string()),
            stderr: String::new(),
        })
    }
}

/// Run `program args...` inside `dir`, capturing output
///
/// Used for quiet bookkeeping commands like `git init`. On failure the tail
/// of the captured stderr is carried in the error so the cause is visible.
pub async fn run_quiet_in_dir(
    program: &str,
    args: &[&str],
    dir: &Path,
) -> Result<(), CommandError> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            command: format!("{} {}", program, args.join(" ")),
            status: output
                .status
                .code()
                .map(|c| format!("exit code {}", c))
                .unwrap_or_else(|| "a signal".to_string()),
            stderr: stderr_tail(&output.stderr),
        })
    }
}
