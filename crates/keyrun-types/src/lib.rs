//! Foundation types for keyrun.
//!
//! This crate contains the types shared by all keyrun crates: the `Command`
//! launch-target model, the raw configuration contract produced by a
//! configuration loader, the error enum, and the collaborator trait seams
//! (`ConfigLoader`, `Launcher`) the core depends on.

pub mod collab;
pub mod command;
pub mod config;
pub mod error;

pub use collab::{ConfigLoader, Launcher};
pub use command::Command;
pub use config::{CommandEntry, CommandsConfig};
pub use error::{LaunchError, Result};
