use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use crate::error::{AppError, AppResult, ConfigError, FileError};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 文档（逐页文本）存放目录
    pub bank_dir: String,
    /// 题库输出目录
    pub out_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_dir: "bank".to_string(),
            out_dir: "web/banks".to_string(),
            verbose_logging: false,
        }
    }
}

/// config.toml 中的可选覆盖项
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    bank_dir: Option<String>,
    out_dir: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 <- config.toml <- 环境变量，逐层覆盖
    pub fn load() -> Self {
        let mut config = Self::default();

        if Path::new("config.toml").exists() {
            match Self::read_file(Path::new("config.toml")) {
                Ok(file) => config.apply_file(file),
                Err(e) => warn!("⚠️ {}", e),
            }
        }

        if let Ok(v) = std::env::var("BANK_DIR") {
            config.bank_dir = v;
        }
        if let Ok(v) = std::env::var("OUT_DIR") {
            config.out_dir = v;
        }
        if let Some(v) = std::env::var("VERBOSE_LOGGING")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.verbose_logging = v;
        }

        config
    }

    /// 读取并解析配置文件
    fn read_file(path: &Path) -> AppResult<ConfigFile> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::File(FileError::ReadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;
        toml::from_str(&content).map_err(|e| {
            AppError::Config(ConfigError::ParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(v) = file.bank_dir {
            self.bank_dir = v;
        }
        if let Some(v) = file.out_dir {
            self.out_dir = v;
        }
        if let Some(v) = file.verbose_logging {
            self.verbose_logging = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_invalid_toml_is_config_error() {
        let dir = std::env::temp_dir().join("qbb_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("坏配置.toml");
        std::fs::write(&path, "bank_dir = [未闭合").unwrap();

        let err = Config::read_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::ParseFailed { .. })));
        assert!(err.to_string().contains("配置文件解析失败"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_file_missing_is_file_error() {
        let err = Config::read_file(Path::new("不存在的配置_qbb.toml")).unwrap_err();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }

    #[test]
    fn test_apply_file_overrides_defaults() {
        let mut config = Config::default();
        config.apply_file(ConfigFile {
            bank_dir: Some("data/docs".to_string()),
            out_dir: None,
            verbose_logging: Some(true),
        });
        assert_eq!(config.bank_dir, "data/docs");
        assert_eq!(config.out_dir, "web/banks");
        assert!(config.verbose_logging);
    }
}
