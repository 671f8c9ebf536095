//! 配置加载
//!
//! 来源按优先级从低到高叠加:
//! 1. 结构体默认值
//! 2. `config.toml`，然后 `config.local.toml`（或 `BOOKSHELF_CONFIG` 指定的单个文件）
//! 3. `BOOKSHELF_` 前缀的环境变量，层级用 `__` 分隔

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File};
use thiserror::Error;

use super::types::AppConfig;

const ENV_PREFIX: &str = "BOOKSHELF";

/// 显式指定配置文件的环境变量
const CONFIG_PATH_ENV: &str = "BOOKSHELF_CONFIG";

/// 工作目录下按顺序叠加的配置文件（扩展名由 config 推断）
const DEFAULT_FILES: [&str; 2] = ["config", "config.local"];

#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取或反序列化失败
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid configuration value for '{key}': {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },
}

/// 加载应用配置
///
/// 例:
/// - `BOOKSHELF_SERVER__PORT=8080`
/// - `BOOKSHELF_DATABASE__PATH=/data/books.db`
/// - `BOOKSHELF_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    load_config_from_path(explicit.as_deref())
}

/// 从指定文件加载；`None` 时在工作目录中查找默认文件（可缺省）
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let builder = match config_path {
        Some(path) => Config::builder().add_source(File::from(path).required(true)),
        None => DEFAULT_FILES.iter().fold(Config::builder(), |builder, name| {
            builder.add_source(File::with_name(name).required(false))
        }),
    };

    let config: AppConfig = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let invalid = |key, reason| Err(ConfigError::Invalid { key, reason });

    if config.server.host.trim().is_empty() {
        return invalid("server.host", "must not be empty");
    }
    if config.server.port == 0 {
        return invalid("server.port", "must be between 1 and 65535");
    }
    if config.database.path.trim().is_empty() {
        return invalid("database.path", "must not be empty");
    }
    if config.database.max_connections == 0 {
        return invalid("database.max_connections", "must be at least 1");
    }
    if tracing::Level::from_str(&config.log.level).is_err() {
        return invalid("log.level", "must be one of trace, debug, info, warn, error");
    }

    Ok(())
}

/// 启动时输出生效的配置
pub fn print_config(config: &AppConfig) {
    tracing::info!(
        addr = %config.server.addr(),
        database = %config.database.path,
        max_connections = config.database.max_connections,
        log_level = %config.log.level,
        log_json = config.log.json,
        "Configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn rejected_key(config: &AppConfig) -> Option<&'static str> {
        match validate_config(config) {
            Err(ConfigError::Invalid { key, .. }) => Some(key),
            _ => None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejected_values() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert_eq!(rejected_key(&config), Some("server.port"));

        let mut config = AppConfig::default();
        config.database.path = "  ".to_string();
        assert_eq!(rejected_key(&config), Some("database.path"));

        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert_eq!(rejected_key(&config), Some("database.max_connections"));

        let mut config = AppConfig::default();
        config.log.level = "verbose".to_string();
        assert_eq!(rejected_key(&config), Some("log.level"));
    }

    #[test]
    fn test_level_names_are_case_insensitive() {
        let mut config = AppConfig::default();
        config.log.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file("[server]\nport = 8080\n\n[database]\npath = \"/tmp/books.db\"\n");

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.path, "/tmp/books.db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_invalid_file_value_is_rejected() {
        let file = toml_file("[database]\nmax_connections = 0\n");

        assert!(matches!(
            load_config_from_path(Some(file.path())),
            Err(ConfigError::Invalid {
                key: "database.max_connections",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(matches!(
            load_config_from_path(Some(&missing)),
            Err(ConfigError::Source(_))
        ));
    }
}
