//! Error types for keyrun.

use std::io;
use std::path::PathBuf;

/// Errors produced by the keyrun launcher core.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// A required argument was empty or otherwise unusable. Raised before
    /// any state change.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The configuration file does not exist at the given path.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but is not syntactically valid.
    /// `message` carries line/column context when the parser provides it.
    #[error("failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The configuration parsed but a command entry is unusable.
    /// `detail` names the entry when it has a usable name.
    #[error("invalid command entry at index {index}: {detail}")]
    ConfigValidation { index: usize, detail: String },

    /// Input could not be resolved to a registered command, URL, or path.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A `!`-prefixed token outside the special-command vocabulary.
    #[error("unknown special command: {0}")]
    UnknownSpecialCommand(String),

    /// Input handed to special-command dispatch without a `!` prefix.
    #[error("not a special command: {0}")]
    NotSpecialCommand(String),

    /// Reload attempted before any configuration was loaded.
    #[error("no configuration path set; load a configuration before reloading")]
    NoConfigurationLoaded,

    /// The launch backend failed to start the resolved target.
    #[error("launch failed: {0}")]
    Launch(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let e = LaunchError::InvalidInput("configuration path is empty".into());
        assert_eq!(format!("{e}"), "invalid input: configuration path is empty");
    }

    #[test]
    fn config_not_found_display_includes_path() {
        let e = LaunchError::ConfigNotFound {
            path: PathBuf::from("commands.yaml"),
        };
        assert_eq!(format!("{e}"), "configuration file not found: commands.yaml");
    }

    #[test]
    fn config_parse_display_includes_path_and_message() {
        let e = LaunchError::ConfigParse {
            path: PathBuf::from("cfg.yaml"),
            message: "mapping values are not allowed at line 3 column 7".into(),
        };
        let msg = format!("{e}");
        assert!(msg.contains("cfg.yaml"));
        assert!(msg.contains("line 3 column 7"));
    }

    #[test]
    fn config_validation_display_includes_index() {
        let e = LaunchError::ConfigValidation {
            index: 2,
            detail: "entry 'google': field 'linkto' is missing".into(),
        };
        let msg = format!("{e}");
        assert!(msg.contains("index 2"));
        assert!(msg.contains("'google'"));
    }

    #[test]
    fn unknown_command_display() {
        let e = LaunchError::UnknownCommand("frobnicate".into());
        assert_eq!(format!("{e}"), "unknown command: frobnicate");
    }

    #[test]
    fn unknown_special_command_display() {
        let e = LaunchError::UnknownSpecialCommand("!restart".into());
        assert_eq!(format!("{e}"), "unknown special command: !restart");
    }

    #[test]
    fn not_special_command_display() {
        let e = LaunchError::NotSpecialCommand("google".into());
        assert_eq!(format!("{e}"), "not a special command: google");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e: LaunchError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("denied"));
    }
}
