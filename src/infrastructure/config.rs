//! 配置加载与校验

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 远端商品集合的默认地址
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001/products";

/// 店面系统配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 远端集合（面板的数据来源）
    pub catalog: CatalogConfig,
    /// 店面页面服务
    pub storefront: ServerConfig,
    /// 内存版集合服务
    pub collection: CollectionConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 集合地址，列表/新建用 `{base_url}`，更新/删除用 `{base_url}/{id}`
    pub base_url: String,
    /// 单个请求的超时时间（秒）
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub bind_address: String,
    pub port: u16,
    /// 集合挂载路径
    pub path: String,
    /// 启动时写入示例商品
    pub seed_sample_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    pub log_dir: PathBuf,
    pub file_prefix: String,
    /// 是否额外写入按天滚动的日志文件
    pub file_output: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            path: "/products".to_string(),
            seed_sample_data: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("./logs"),
            file_prefix: "storefront".to_string(),
            file_output: false,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl CollectionConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = reqwest::Url::parse(&self.catalog.base_url).map_err(|e| {
            ConfigError::Validation(format!("无效的集合地址 {}: {}", self.catalog.base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::Validation(format!(
                "集合地址不能作为基础路径: {}",
                self.catalog.base_url
            )));
        }
        if self.catalog.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        for (name, address, port) in [
            ("storefront", &self.storefront.bind_address, self.storefront.port),
            ("collection", &self.collection.bind_address, self.collection.port),
        ] {
            if address.is_empty() {
                return Err(ConfigError::Validation(format!("{} 绑定地址不能为空", name)));
            }
            if port == 0 {
                return Err(ConfigError::Validation(format!("{} 端口必须大于0", name)));
            }
        }

        if !self.collection.path.starts_with('/') || self.collection.path.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "集合路径必须以 / 开头且不能为根路径: {}",
                self.collection.path
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并完成校验
pub fn load_config() -> Result<Config, ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            println!("从配置文件加载: {}", path);
            let config = Config::load_from_file(path)?;
            config.validate()?;
            return Ok(config);
        }
    }

    println!("未找到配置文件，使用默认配置");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.storefront.port, 3000);
        assert_eq!(config.collection.port, 3001);
        assert_eq!(config.collection.path, "/products");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.catalog.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.storefront.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.collection.path = "/".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config").join("config.toml");

        let mut config = Config::default();
        config.catalog.base_url = "http://10.0.0.2:8000/foods".to_string();
        config.save_to_file(&config_path).unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.catalog.base_url, "http://10.0.0.2:8000/foods");
        assert_eq!(loaded.storefront.port, config.storefront.port);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[catalog]\nbase_url = \"http://example.com/items\"\n").unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.catalog.base_url, "http://example.com/items");
        assert_eq!(loaded.catalog.timeout_seconds, 10);
        assert_eq!(loaded.logging.level, "info");
    }
}
