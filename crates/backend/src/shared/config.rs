use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Откуда загружен конфиг; `None` для встроенного
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "target/logs".to_string(),
        }
    }
}

/// Конфигурация по умолчанию, встроенная в бинарник
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[seed]
demo_data = true

[logging]
dir = "target/logs"
"#;

/// Загрузить конфигурацию из config.toml
///
/// Порядок поиска:
/// 1. Рядом с исполняемым файлом
/// 2. Встроенный конфиг по умолчанию
///
/// Вызывается до инициализации логирования, поэтому источник
/// сохраняется в `loaded_from` и выводится позже.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let mut config = parse_config(&contents)?;
                config.loaded_from = Some(config_path);
                return Ok(config);
            }
        }
    }

    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Адрес для TcpListener
pub fn bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.host, config.server.port)
}

/// Каталог логов; относительный путь считается от текущей директории
pub fn log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.logging.dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(dir))
            .unwrap_or_else(|_| dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.seed.demo_data);
        assert_eq!(config.logging.dir, "target/logs");
        assert!(config.loaded_from.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(bind_address(&config), "127.0.0.1:8080");
        assert!(config.seed.demo_data);
        assert_eq!(config.logging.dir, "target/logs");
    }

    #[test]
    fn test_seed_can_be_disabled() {
        let config = parse_config("[seed]\ndemo_data = false\n").unwrap();
        assert!(!config.seed.demo_data);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[server]\nport = \"abc\"\n").is_err());
    }
}
