//! Collaborator trait seams.
//!
//! The core never touches the filesystem parser or the OS process API
//! directly; it depends on these traits so both can be stubbed in tests.

use std::path::Path;

use crate::config::CommandsConfig;
use crate::error::Result;

/// Turns a configuration file into a `CommandsConfig`.
pub trait ConfigLoader {
    /// Load and parse the configuration at `path`.
    ///
    /// Errors: `ConfigNotFound` when the file is absent, `ConfigParse` when
    /// the content is syntactically invalid, `Io` for other I/O failures.
    fn load(&self, path: &Path) -> Result<CommandsConfig>;
}

/// Starts a resolved launch target.
///
/// Fire-and-forget: `launch` returns once the launch call itself has
/// succeeded or failed; it never waits for the launched process to exit.
pub trait Launcher: Send + Sync {
    fn launch(&self, target: &str, arguments: Option<&str>) -> Result<()>;
}
