//! Application configuration: a TOML file under the platform config
//! directory, with defaults for every field so no file is required.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FunnelConfig, ProviderConfig, QuizConfig};
