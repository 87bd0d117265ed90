//! The `Command` launch-target model.

/// A registered launch target.
///
/// `name` is the token the user types; it acts as a case-insensitive key
/// within the registry. `link_to` is what gets launched: a URL, a filesystem
/// path, an executable, or a special-command literal such as `!reload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Case-insensitive lookup key. Never blank.
    pub name: String,
    /// Launch target. Never blank.
    pub link_to: String,
    /// Documentation only; no behavioral effect.
    pub description: Option<String>,
    /// Literal argument text used when the command is launched without
    /// runtime-supplied arguments.
    pub arguments: Option<String>,
}

impl Command {
    /// Create a command with just a name and target.
    pub fn new(name: impl Into<String>, link_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link_to: link_to.into(),
            description: None,
            arguments: None,
        }
    }

    /// The registry key for this command: the case-folded name.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
