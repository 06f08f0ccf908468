//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_BASE_URL, NileConfig, ResolveOptions, ResolvedConfig,
    resolve_config, parse_base_url,
};
