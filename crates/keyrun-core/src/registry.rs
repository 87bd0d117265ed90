//! The authoritative name-to-command store.
//!
//! Keys are explicitly lower-cased names, so case-insensitivity is a
//! property of the registry itself rather than of any particular map type.

use std::collections::HashMap;
use std::sync::RwLock;

use keyrun_types::{Command, LaunchError, Result};

/// Case-insensitive registry of launch commands.
///
/// Lookups may run concurrently; mutation is expected to come from a single
/// logical writer. `replace_all` swaps a pre-built map in one store so a
/// reload appears atomic to readers.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: RwLock<HashMap<String, Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same
    /// case-insensitive name.
    ///
    /// Rejects blank `name` or `link_to` with `InvalidInput` before touching
    /// the store.
    pub fn register(&self, command: Command) -> Result<()> {
        if command.name.trim().is_empty() {
            return Err(LaunchError::InvalidInput(
                "command name must not be blank".into(),
            ));
        }
        if command.link_to.trim().is_empty() {
            return Err(LaunchError::InvalidInput(format!(
                "command '{}' has a blank link target",
                command.name
            )));
        }
        let key = command.key();
        let mut guard = self.commands.write().expect("registry lock poisoned");
        if let Some(old) = guard.insert(key, command) {
            log::debug!("replaced existing command '{}'", old.name);
        }
        Ok(())
    }

    /// Remove the command with the given case-insensitive name.
    /// Returns whether an entry was found and removed.
    pub fn remove(&self, name: &str) -> bool {
        let mut guard = self.commands.write().expect("registry lock poisoned");
        guard.remove(&name.to_lowercase()).is_some()
    }

    /// Empty the registry unconditionally.
    pub fn clear(&self) {
        let mut guard = self.commands.write().expect("registry lock poisoned");
        guard.clear();
    }

    /// Case-insensitive existence check.
    pub fn contains(&self, name: &str) -> bool {
        let guard = self.commands.read().expect("registry lock poisoned");
        guard.contains_key(&name.to_lowercase())
    }

    /// Look up a command by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<Command> {
        let guard = self.commands.read().expect("registry lock poisoned");
        guard.get(&name.to_lowercase()).cloned()
    }

    /// An owned snapshot of all commands. Order is unspecified.
    pub fn all(&self) -> Vec<Command> {
        let guard = self.commands.read().expect("registry lock poisoned");
        guard.values().cloned().collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        let guard = self.commands.read().expect("registry lock poisoned");
        guard.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the entire contents with `commands` in one step.
    ///
    /// Later entries with the same case-folded name replace earlier ones.
    /// The new map is built off to the side and swapped in under a single
    /// write lock, so readers see either the old or the new set in full.
    pub fn replace_all(&self, commands: Vec<Command>) {
        let mut next = HashMap::with_capacity(commands.len());
        for command in commands {
            next.insert(command.key(), command);
        }
        let mut guard = self.commands.write().expect("registry lock poisoned");
        *guard = next;
    }
}
