//! Configuration loading for keyrun.
//!
//! Commands live in a YAML file (`commands.yaml` by default): a top-level
//! `commands:` sequence of entries with `name`, `linkto`, and optional
//! `description` / `arguments` keys. This crate turns that file into the
//! `CommandsConfig` contract consumed by the core.

mod loader;

/// Configuration path used when the embedding application supplies none.
pub use loader::DEFAULT_CONFIG_PATH;
/// `ConfigLoader` implementation backed by `serde_yaml`.
pub use loader::YamlConfigLoader;
