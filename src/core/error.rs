//! 错误处理模块
//!
//! 定义了 crate 中使用的统一错误类型。
//!
//! 节点本身的渲染路径不会失败（见 `component::node`），
//! 这里的错误只来自外围：配置文件、场景文件、日志初始化。

use std::fmt;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, VisualNodeError>;

/// visual_node 的错误类型
#[derive(Debug)]
pub enum VisualNodeError {
    /// 配置错误
    Config(ConfigError),

    /// IO 错误
    Io(std::io::Error),

    /// 日志系统错误
    Log(String),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

impl fmt::Display for VisualNodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualNodeError::Config(e) => write!(f, "Configuration error: {}", e),
            VisualNodeError::Io(e) => write!(f, "IO error: {}", e),
            VisualNodeError::Log(msg) => write!(f, "Log error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for VisualNodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisualNodeError::Io(e) => Some(e),
            VisualNodeError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for VisualNodeError {
    fn from(err: std::io::Error) -> Self {
        VisualNodeError::Io(err)
    }
}

impl From<ConfigError> for VisualNodeError {
    fn from(err: ConfigError) -> Self {
        VisualNodeError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_display() {
        let err: VisualNodeError = ConfigError::InvalidValue {
            field: "stage.width".to_string(),
            reason: "must be greater than 0".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for 'stage.width': must be greater than 0"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_log_error_display() {
        let err = VisualNodeError::Log("subscriber already set".to_string());
        assert_eq!(err.to_string(), "Log error: subscriber already set");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = VisualNodeError::from(io);
        assert!(matches!(err, VisualNodeError::Io(_)));
    }
}
