//! Command resolution pipeline for keyrun.
//!
//! The pipeline is registry-based dispatch over user-typed tokens: an
//! `AutoCompleter` answers prefix queries for live UI feedback, a
//! `CommandRegistry` maps case-insensitive names to launch targets, a
//! `CommandExecutor` resolves submitted input to a concrete launch, and the
//! `Application` orchestrator ties configuration load/reload and the
//! special-command vocabulary (`!reload`, `!version`, `!exit`) together.

mod autocomplete;
mod executor;
mod orchestrator;
mod registry;

/// Prefix-based lookup over the known command names.
pub use autocomplete::AutoCompleter;
/// Resolves user input into a concrete launch action.
pub use executor::CommandExecutor;
/// A resolved launch: target plus optional argument text.
pub use executor::Execution;
/// Coordinates configuration load/reload and special-command dispatch.
pub use orchestrator::Application;
/// Result of routing one submitted input line.
pub use orchestrator::Outcome;
/// Reply from special-command dispatch.
pub use orchestrator::Reply;
/// Authoritative case-insensitive name-to-command store.
pub use registry::CommandRegistry;
