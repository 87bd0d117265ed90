//! Turning user input into a concrete launch action.
//!
//! Resolution order: registered command by leading token, then direct-URL
//! classification, then drive-letter path classification. The actual launch
//! goes through the `Launcher` seam so resolution stays testable without
//! spawning processes.

use std::sync::Arc;

use keyrun_types::{LaunchError, Launcher, Result};

use crate::registry::CommandRegistry;

/// URL schemes accepted for direct launch, matched as exact prefixes.
const URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// A resolved launch: the target handed to the launcher plus optional
/// argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub target: String,
    pub arguments: Option<String>,
}

/// Resolves user input against the registry and hands it to a `Launcher`.
pub struct CommandExecutor {
    registry: Arc<CommandRegistry>,
    launcher: Arc<dyn Launcher>,
}

impl CommandExecutor {
    pub fn new(registry: Arc<CommandRegistry>, launcher: Arc<dyn Launcher>) -> Self {
        Self { registry, launcher }
    }

    /// Resolve `input` without launching anything.
    ///
    /// The leading token is looked up as a registered command name
    /// (case-insensitive). Runtime arguments take precedence over the
    /// command's static `arguments` field. Unmatched input is classified as
    /// a direct URL or drive-letter path; anything else is `UnknownCommand`.
    pub fn resolve(&self, input: &str) -> Result<Execution> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LaunchError::InvalidInput("command input is empty".into()));
        }

        let (token, runtime_args) = split_input(trimmed);
        if let Some(command) = self.registry.get(token) {
            let arguments = match runtime_args {
                Some(args) => Some(args.to_string()),
                None => command.arguments.clone(),
            };
            return Ok(Execution {
                target: command.link_to,
                arguments,
            });
        }

        // No registered match: classify the entire input directly.
        if is_direct_url(trimmed) || is_drive_path(trimmed) {
            return Ok(Execution {
                target: trimmed.to_string(),
                arguments: None,
            });
        }

        Err(LaunchError::UnknownCommand(trimmed.to_string()))
    }

    /// The argument half of `resolve`, side-effect free.
    pub fn arguments(&self, input: &str) -> Result<Option<String>> {
        Ok(self.resolve(input)?.arguments)
    }

    /// Resolve `input` and hand the result to the launcher.
    ///
    /// Fire-and-forget: returns once the launch call itself has returned.
    /// Launcher failures propagate unchanged.
    pub fn execute(&self, input: &str) -> Result<Execution> {
        let execution = self.resolve(input)?;
        log::info!(
            "launching {} (arguments: {})",
            execution.target,
            execution.arguments.as_deref().unwrap_or("none")
        );
        self.launcher
            .launch(&execution.target, execution.arguments.as_deref())?;
        Ok(execution)
    }
}

/// Split input into a leading token and the raw argument remainder.
///
/// The first whitespace run is the separator; the remainder is passed
/// through unmodified (quoted substrings stay opaque).
fn split_input(input: &str) -> (&str, Option<&str>) {
    match input.find(char::is_whitespace) {
        Some(idx) => {
            let rest = input[idx..].trim_start();
            let rest = if rest.is_empty() { None } else { Some(rest) };
            (&input[..idx], rest)
        },
        None => (input, None),
    }
}

/// Exact prefix match against the recognized URL schemes.
fn is_direct_url(input: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| input.starts_with(scheme))
}

/// Drive-letter path pattern: a single ASCII letter followed by `:\`.
fn is_drive_path(input: &str) -> bool {
    let mut chars = input.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), Some('\\')) if letter.is_ascii_alphabetic()
    )
}
