//! The real launch backend: platform opener and process spawn.

use std::process::{self, Stdio};

use keyrun_types::{LaunchError, Launcher, Result};

/// Launches targets via the OS.
///
/// Targets without arguments (URLs, documents, bare executables) go through
/// the platform opener so the OS picks the right handler. A target with
/// arguments is spawned directly; the argument text is split on whitespace
/// with double-quoted substrings kept as single tokens, matching how the
/// resolution pipeline treats quotes as opaque. Spawn only; the child is
/// never waited on.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, target: &str, arguments: Option<&str>) -> Result<()> {
        let mut cmd = match arguments {
            Some(args) => {
                let mut cmd = process::Command::new(target);
                cmd.args(split_arguments(args));
                cmd
            },
            None => opener_command(target),
        };
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd.spawn()
            .map_err(|e| LaunchError::Launch(format!("{target}: {e}")))?;
        log::debug!("spawned {target}");
        Ok(())
    }
}

/// Split argument text into spawn tokens.
///
/// Whitespace separates tokens; a double-quoted substring is one token with
/// the quotes stripped. An unterminated quote runs to the end of the text.
fn split_arguments(args: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in args.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            },
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> process::Command {
    let mut cmd = process::Command::new("cmd");
    cmd.args(["/C", "start", "", target]);
    cmd
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> process::Command {
    let mut cmd = process::Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(target: &str) -> process::Command {
    let mut cmd = process::Command::new("xdg-open");
    cmd.arg(target);
    cmd
}
