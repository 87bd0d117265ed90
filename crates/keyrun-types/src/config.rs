//! Raw configuration contract.
//!
//! A configuration loader produces a `CommandsConfig`: an ordered list of
//! pre-validation command entries. Every field is optional at this stage so
//! a missing `name` or `linkto` surfaces as a validation error that can
//! point at the offending entry, not as a parse failure.

use serde::Deserialize;

use crate::command::Command;
use crate::error::{LaunchError, Result};

/// One pre-validation command entry, as deserialized from the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub linkto: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub arguments: Option<String>,
}

impl CommandEntry {
    /// Validate this entry and convert it into a `Command`.
    ///
    /// `index` is the entry's position in the configuration list and is
    /// embedded in the error so the user can find the offending entry.
    pub fn validate(&self, index: usize) -> Result<Command> {
        let name = required_field(self.name.as_deref(), "name", index, self.name.as_deref())?;
        let link_to =
            required_field(self.linkto.as_deref(), "linkto", index, self.name.as_deref())?;
        Ok(Command {
            name,
            link_to,
            description: self.description.clone(),
            arguments: self.arguments.clone(),
        })
    }
}

fn required_field(
    value: Option<&str>,
    field: &str,
    index: usize,
    name: Option<&str>,
) -> Result<String> {
    let detail = |what: &str| match name.map(str::trim) {
        Some(n) if !n.is_empty() => format!("entry '{n}': field '{field}' is {what}"),
        _ => format!("field '{field}' is {what}"),
    };
    match value {
        None => Err(LaunchError::ConfigValidation {
            index,
            detail: detail("missing"),
        }),
        Some(v) if v.trim().is_empty() => Err(LaunchError::ConfigValidation {
            index,
            detail: detail("blank"),
        }),
        Some(v) => Ok(v.trim().to_string()),
    }
}

/// The deserialized configuration unit: an ordered list of command entries.
///
/// An empty list is legal and registers zero commands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandsConfig {
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

impl CommandsConfig {
    /// Validate every entry, preserving order. Fails on the first bad entry.
    pub fn into_commands(&self) -> Result<Vec<Command>> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.validate(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: Option<&str>, linkto: Option<&str>) -> CommandEntry {
        CommandEntry {
            name: name.map(String::from),
            linkto: linkto.map(String::from),
            ..CommandEntry::default()
        }
    }

    #[test]
    fn valid_entry_converts() {
        let cmd = entry(Some("google"), Some("https://google.com"))
            .validate(0)
            .unwrap();
        assert_eq!(cmd.name, "google");
        assert_eq!(cmd.link_to, "https://google.com");
    }

    #[test]
    fn fields_are_trimmed() {
        let cmd = entry(Some("  docs  "), Some(" https://docs.rs "))
            .validate(0)
            .unwrap();
        assert_eq!(cmd.name, "docs");
        assert_eq!(cmd.link_to, "https://docs.rs");
    }

    #[test]
    fn missing_name_reports_index() {
        let err = entry(None, Some("https://google.com"))
            .validate(3)
            .unwrap_err();
        match err {
            LaunchError::ConfigValidation { index, detail } => {
                assert_eq!(index, 3);
                assert!(detail.contains("'name'"));
                assert!(detail.contains("missing"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_linkto_reports_entry_name() {
        let err = entry(Some("google"), None).validate(1).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("index 1"));
        assert!(msg.contains("'google'"));
        assert!(msg.contains("'linkto'"));
    }

    #[test]
    fn blank_linkto_is_rejected() {
        let err = entry(Some("google"), Some("   ")).validate(0).unwrap_err();
        assert!(format!("{err}").contains("blank"));
    }

    #[test]
    fn empty_config_yields_no_commands() {
        let cfg = CommandsConfig::default();
        assert!(cfg.into_commands().unwrap().is_empty());
    }

    #[test]
    fn into_commands_preserves_order() {
        let cfg = CommandsConfig {
            commands: vec![
                entry(Some("a"), Some("https://a.example")),
                entry(Some("b"), Some("https://b.example")),
            ],
        };
        let names: Vec<String> = cfg
            .into_commands()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["a", "b"]);
    }
}
