// ==========================================
// 弹药配装优化系统 - 运行配置
// ==========================================
// 职责: 配置加载与多级覆写
// 优先级: 默认值 < JSON 配置文件 < 环境变量 < 命令行参数
// ==========================================

use crate::domain::types::{RatioMode, ZeroTakePolicy};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// 环境变量键
// ==========================================
pub mod config_keys {
    // 配置文件路径
    pub const CONFIG_PATH: &str = "AMMO_ALLOCATOR_CONFIG";

    // 输入 / 输出
    pub const INPUT_PATH: &str = "AMMO_ALLOCATOR_INPUT";
    pub const OUTPUT_PATH: &str = "AMMO_ALLOCATOR_OUTPUT";
    pub const OUTPUT_FORMAT: &str = "AMMO_ALLOCATOR_OUTPUT_FORMAT";
    pub const DECIMAL_PLACES: &str = "AMMO_ALLOCATOR_DECIMAL_PLACES";

    // 分配策略
    pub const RATIO_MODE: &str = "AMMO_ALLOCATOR_RATIO_MODE";
    pub const ZERO_TAKE: &str = "AMMO_ALLOCATOR_ZERO_TAKE";
}

// ==========================================
// AllocatorConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// 输入文件路径
    pub input_path: PathBuf,

    /// 输出文件路径
    pub output_path: PathBuf,

    /// 比值计算方式
    pub ratio_mode: RatioMode,

    /// 零比例选择处理
    pub zero_take_policy: ZeroTakePolicy,

    /// 报告保留小数位
    pub decimal_places: usize,

    /// 报告格式
    pub output_format: OutputFormat,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("inputPS3.txt"),
            output_path: PathBuf::from("outputPS3.txt"),
            ratio_mode: RatioMode::default(),
            zero_take_policy: ZeroTakePolicy::default(),
            decimal_places: 2,
            output_format: OutputFormat::default(),
        }
    }
}

impl AllocatorConfig {
    /// 加载配置（文件 + 环境变量）
    ///
    /// 配置文件查找顺序：
    /// 1) AMMO_ALLOCATOR_CONFIG 指定的路径（必须存在）
    /// 2) 用户配置目录/ammo-allocator/config.json（存在时才读取）
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var(config_keys::CONFIG_PATH)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self::load_with(explicit.as_deref(), |key| std::env::var(key).ok())
    }

    /// 加载配置（显式文件路径 + 键值覆写来源）
    ///
    /// - `explicit_path` 为 Some 时该文件必须存在
    /// - 为 None 时仅在默认配置文件存在时读取
    pub fn load_with<F>(explicit_path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// 从 JSON 文件读取（缺省字段使用默认值）
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(path = %path.display(), "已加载配置文件");
        Ok(config)
    }

    /// 应用键值覆写（环境变量或测试注入）
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get(config_keys::INPUT_PATH) {
            self.input_path = PathBuf::from(v);
        }
        if let Some(v) = get(config_keys::OUTPUT_PATH) {
            self.output_path = PathBuf::from(v);
        }
        if let Some(v) = get(config_keys::OUTPUT_FORMAT) {
            self.output_format = parse_value(config_keys::OUTPUT_FORMAT, &v)?;
        }
        if let Some(v) = get(config_keys::DECIMAL_PLACES) {
            self.decimal_places = v.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::ValueError {
                    key: config_keys::DECIMAL_PLACES.to_string(),
                    value: v.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(v) = get(config_keys::RATIO_MODE) {
            self.ratio_mode = parse_value(config_keys::RATIO_MODE, &v)?;
        }
        if let Some(v) = get(config_keys::ZERO_TAKE) {
            self.zero_take_policy = parse_value(config_keys::ZERO_TAKE, &v)?;
        }

        debug!(config = ?self, "配置覆写完成");
        Ok(())
    }

    /// 应用命令行位置参数：[输入路径] [输出路径]
    pub fn apply_cli_args<I>(&mut self, args: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if let Some(input) = args.next() {
            self.input_path = PathBuf::from(input);
        }
        if let Some(output) = args.next() {
            self.output_path = PathBuf::from(output);
        }
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse().map_err(|message| ConfigError::ValueError {
        key: key.to_string(),
        value: value.to_string(),
        message,
    })
}

/// 默认配置文件路径：用户配置目录/ammo-allocator/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ammo-allocator").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AllocatorConfig::default();
        assert_eq!(config.input_path, PathBuf::from("inputPS3.txt"));
        assert_eq!(config.ratio_mode, RatioMode::Exact);
        assert_eq!(config.zero_take_policy, ZeroTakePolicy::Omit);
        assert_eq!(config.decimal_places, 2);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"ratio_mode": "truncated", "output_format": "json"}}"#).unwrap();

        let config = AllocatorConfig::from_file(file.path()).unwrap();

        assert_eq!(config.ratio_mode, RatioMode::Truncated);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.output_path, PathBuf::from("outputPS3.txt"));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = AllocatorConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = AllocatorConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (config_keys::INPUT_PATH, "in.txt"),
                (config_keys::ZERO_TAKE, "keep"),
                (config_keys::DECIMAL_PLACES, "3"),
                (config_keys::OUTPUT_PATH, "   "),
            ]))
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.zero_take_policy, ZeroTakePolicy::Keep);
        assert_eq!(config.decimal_places, 3);
        assert_eq!(config.output_path, PathBuf::from("outputPS3.txt"));
    }

    #[test]
    fn test_override_bad_value() {
        let mut config = AllocatorConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(config_keys::RATIO_MODE, "rounded")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::ValueError { ref key, .. } if key == config_keys::RATIO_MODE));
    }

    #[test]
    fn test_cli_args() {
        let mut config = AllocatorConfig::default();
        config.apply_cli_args(vec!["a.txt".to_string()]);
        assert_eq!(config.input_path, PathBuf::from("a.txt"));
        assert_eq!(config.output_path, PathBuf::from("outputPS3.txt"));

        config.apply_cli_args(vec!["b.txt".to_string(), "c.txt".to_string()]);
        assert_eq!(config.output_path, PathBuf::from("c.txt"));
    }
}
