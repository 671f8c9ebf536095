//! 应用配置
//!
//! 默认值、TOML 文件和 `BOOKSHELF_*` 环境变量三层叠加

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
