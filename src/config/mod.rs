mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, validate_config};
pub use model::{Config, DefaultConfig, ExcludeConfig};
