//! 配置管理模块
//!
//! 提供舞台（stage）配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [stage]
//! width = 64
//! height = 20
//! title = "visual_node"
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//!
//! [runtime]
//! frames = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 舞台宽高的上限（字符格）
pub const MAX_STAGE_SIZE: u32 = 4096;

/// 顶层配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 舞台配置
    #[serde(default)]
    pub stage: StageConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 运行配置
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// 舞台配置
///
/// 舞台尺寸以字符格为单位，供 ASCII 合成器使用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_title")]
    pub title: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// 演示循环运行的帧数
    #[serde(default = "default_frames")]
    pub frames: u64,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_width() -> u32 { 64 }
fn default_height() -> u32 { 20 }
fn default_title() -> String { "visual_node".to_string() }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "visual_node.log".to_string() }
fn default_frames() -> u64 { 30 }

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use visual_node::core::Config;
    ///
    /// let config = Config::from_file("config.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--width <value>`: 设置舞台宽度
    /// - `--height <value>`: 设置舞台高度
    /// - `--frames <value>`: 设置运行帧数
    /// - `--trace`: 日志级别设为 trace，会输出每一次 surface 写入
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if args.iter().any(|a| a == "--trace") {
            self.logging.level = LogLevel::Trace;
        }

        if let Some(width) = parse_flag(&args, "--width") {
            self.stage.width = width;
        }

        if let Some(height) = parse_flag(&args, "--height") {
            self.stage.height = height;
        }

        if let Some(frames) = parse_flag(&args, "--frames") {
            self.runtime.frames = frames;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.stage.width == 0 || self.stage.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stage.width/height".to_string(),
                reason: "Stage dimensions must be greater than 0".to_string(),
            }
            .into());
        }

        if self.stage.width > MAX_STAGE_SIZE || self.stage.height > MAX_STAGE_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "stage.width/height".to_string(),
                reason: format!("Stage dimensions must not exceed {}", MAX_STAGE_SIZE),
            }
            .into());
        }

        if self.logging.file_output && self.logging.log_file.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "A log file path is required when file_output is enabled".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// 读取 `--flag <value>` 形式的参数，值无法解析时忽略
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stage.width, 64);
        assert_eq!(config.stage.height, 20);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.runtime.frames, 30);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.stage.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_stage_is_rejected() {
        let mut config = Config::default();
        config.stage.width = MAX_STAGE_SIZE;
        assert!(config.validate().is_ok());

        config.apply_args(["visual_node", "--width", "4294967295"]);
        assert_eq!(config.stage.width, u32::MAX);
        assert!(config.validate().is_err());

        config.stage.width = 64;
        config.stage.height = MAX_STAGE_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [stage]
            width = 100

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.stage.width, 100);
        assert_eq!(config.stage.height, 20);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.runtime.frames, 30);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.stage.title = "demo".to_string();
        config.runtime.frames = 5;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();

        assert_eq!(parsed.stage.title, "demo");
        assert_eq!(parsed.runtime.frames, 5);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join("visual_node_config_test.toml");
        let mut config = Config::default();
        config.stage.width = 12;

        config.save_to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.stage.width, 12);
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args(["visual_node", "--width", "40", "--frames", "x", "--trace"]);

        assert_eq!(config.stage.width, 40);
        assert_eq!(config.runtime.frames, 30);
        assert_eq!(config.logging.level, LogLevel::Trace);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::from_file("definitely/not/here.toml").is_err());
        let config = Config::from_file_or_default("definitely/not/here.toml");
        assert_eq!(config.stage.width, 64);
    }
}
