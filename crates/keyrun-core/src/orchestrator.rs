//! Application orchestration: configuration lifecycle and special commands.
//!
//! The orchestrator owns the wiring between the configuration loader, the
//! registry, the autocompleter, and the executor. A configuration load is a
//! full rebuild: entries are validated off to the side, then swapped into
//! the registry and word list wholesale, so a failed load or reload never
//! disturbs the active command set.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use keyrun_types::{Command, ConfigLoader, LaunchError, Launcher, Result};

use crate::autocomplete::AutoCompleter;
use crate::executor::{CommandExecutor, Execution};
use crate::registry::CommandRegistry;

/// Reply from special-command dispatch.
///
/// `Exit` is a control signal, not an error: callers must match on it, so
/// termination intent cannot be swallowed by `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Human-readable confirmation or informational text.
    Message(String),
    /// The user asked to terminate the application gracefully.
    Exit,
}

/// Result of routing one submitted input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input resolved to a launch that was handed to the launcher.
    Launched(Execution),
    /// A special command produced informational text.
    Message(String),
    /// The user asked to terminate the application gracefully.
    Exit,
}

/// Coordinates configuration load/reload and input dispatch.
///
/// State machine: `Uninitialized` until the first successful `initialize`,
/// then `Ready` (a stored configuration path exists). Mutating operations
/// assume a single logical writer; reads stay consistent because every
/// rebuild swaps completed structures.
pub struct Application {
    loader: Box<dyn ConfigLoader>,
    registry: Arc<CommandRegistry>,
    completer: Arc<AutoCompleter>,
    executor: CommandExecutor,
    config_path: RwLock<Option<PathBuf>>,
}

impl Application {
    /// Wire up an orchestrator with empty registry and word list.
    pub fn new(loader: Box<dyn ConfigLoader>, launcher: Arc<dyn Launcher>) -> Self {
        let registry = Arc::new(CommandRegistry::new());
        let completer = Arc::new(AutoCompleter::new());
        let executor = CommandExecutor::new(registry.clone(), launcher);
        Self {
            loader,
            registry,
            completer,
            executor,
            config_path: RwLock::new(None),
        }
    }

    /// Load the configuration at `path` and populate the command set.
    ///
    /// Rejects an empty path before any state change. On load or validation
    /// failure the registry and word list stay exactly as they were (still
    /// empty on first use). Returns the number of registered commands.
    /// Calling this again from `Ready` performs the same full rebuild.
    pub fn initialize(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LaunchError::InvalidInput(
                "configuration path is empty".into(),
            ));
        }

        let count = self.load_into_place(path)?;
        *self.config_path.write().expect("config path lock poisoned") =
            Some(path.to_path_buf());
        log::info!(
            "initialized with {count} commands from {}",
            path.display()
        );
        Ok(count)
    }

    /// Re-read the stored configuration path and rebuild the command set.
    ///
    /// Fails with `NoConfigurationLoaded` before the first successful
    /// `initialize`; there is no implicit path defaulting. The load happens
    /// first: only a fully successful load and validation replaces the live
    /// registry and word list, so a reload against a broken or missing file
    /// leaves the working command set untouched.
    pub fn reload(&self) -> Result<usize> {
        let path = self
            .config_path
            .read()
            .expect("config path lock poisoned")
            .clone()
            .ok_or(LaunchError::NoConfigurationLoaded)?;

        let count = self.load_into_place(&path)?;
        log::info!("reloaded {count} commands from {}", path.display());
        Ok(count)
    }

    /// Load + validate, then swap the results in. Nothing is mutated until
    /// both steps have succeeded.
    fn load_into_place(&self, path: &Path) -> Result<usize> {
        let config = self.loader.load(path)?;
        let commands = config.into_commands()?;
        let commands = dedup_by_key(commands);
        let words: Vec<String> = commands.iter().map(|c| c.name.clone()).collect();

        let count = commands.len();
        // Two swap points, each atomic on its own: a reader interleaving
        // between them can pair new commands with the previous word list for
        // an instant, but never sees a partially-cleared set. The single
        // logical writer guarantees the structures converge immediately.
        self.registry.replace_all(commands);
        self.completer.update_word_list(words);
        Ok(count)
    }

    /// Handle one of the reserved `!`-prefixed tokens.
    ///
    /// Vocabulary (case-insensitive, fixed): `!reload`, `!version`, `!exit`.
    /// `!version` and `!exit` work in any state. `!reload` completes fully,
    /// success or failure, before this returns.
    pub fn handle_special(&self, input: &str) -> Result<Reply> {
        let token = input.trim();
        if token.is_empty() {
            return Err(LaunchError::InvalidInput(
                "special command input is empty".into(),
            ));
        }
        if !token.starts_with('!') {
            return Err(LaunchError::NotSpecialCommand(token.to_string()));
        }

        match token.to_lowercase().as_str() {
            "!reload" => {
                let count = self.reload()?;
                Ok(Reply::Message(format!(
                    "configuration reloaded: {count} commands"
                )))
            },
            "!version" => Ok(Reply::Message(format!("keyrun {}", self.version()))),
            "!exit" => Ok(Reply::Exit),
            _ => Err(LaunchError::UnknownSpecialCommand(token.to_string())),
        }
    }

    /// Route one submitted line: `!`-prefixed input goes to special-command
    /// handling, everything else to the executor.
    pub fn dispatch(&self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        if trimmed.starts_with('!') {
            return Ok(match self.handle_special(trimmed)? {
                Reply::Message(text) => Outcome::Message(text),
                Reply::Exit => Outcome::Exit,
            });
        }
        let execution = self.executor.execute(trimmed)?;
        Ok(Outcome::Launched(execution))
    }

    /// Known command names starting with `prefix` (read-only, UI feedback).
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        self.completer.candidates(prefix)
    }

    /// Longest common completion of `input` (read-only, UI feedback).
    pub fn complete(&self, input: &str) -> String {
        self.completer.complete(input)
    }

    /// The version identifier for this build.
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The authoritative command store.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The resolution logic, for inspection without launching.
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Whether a configuration has been loaded.
    pub fn is_ready(&self) -> bool {
        self.config_path
            .read()
            .expect("config path lock poisoned")
            .is_some()
    }
}

/// Collapse duplicate case-folded names: the later entry wins, but keeps the
/// first occurrence's position so the word list mirrors the registry key set
/// in configuration order.
fn dedup_by_key(commands: Vec<Command>) -> Vec<Command> {
    let mut out: Vec<Command> = Vec::with_capacity(commands.len());
    for command in commands {
        match out.iter_mut().find(|c| c.key() == command.key()) {
            Some(slot) => *slot = command,
            None => out.push(command),
        }
    }
    out
}
