pub mod config;

pub use config::{ApiKey, ConfigManager, ServerConfig};
