//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//!
//! 节点渲染时的每一次 surface 写入都以 `trace` 级别记录在
//! `visual_node::node` 目标下，舞台级别的信息记录在 `visual_node::stage` 下。
//! 可以用 `RUST_LOG` 风格的过滤语法只打开其中之一。
//!
//! # 使用示例
//!
//! ```no_run
//! use visual_node::core::{config::LogLevel, log};
//!
//! log::init_logger(LogLevel::Info, false, None).unwrap();
//! visual_node::stage_info!(frames = 30, "Stage started");
//! ```

use std::path::Path;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::config::LogLevel;
use super::error::{Result, VisualNodeError};

/// 初始化日志系统
///
/// 只能调用一次，重复调用会返回 `VisualNodeError::Log`。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否同时输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "visual_node.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(true);

    let result = if file_output {
        let log_path = log_file_path.unwrap_or("visual_node.log");
        let path = Path::new(log_path);
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("visual_node.log");

        // 每天滚动
        let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, filename);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .try_init()
    };

    result.map_err(|e| VisualNodeError::Log(e.to_string()))
}

fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

/// 舞台日志 - Info 级别
#[macro_export]
macro_rules! stage_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "visual_node::stage", $($arg)*)
    };
}

/// 舞台日志 - Warn 级别
#[macro_export]
macro_rules! stage_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "visual_node::stage", $($arg)*)
    };
}

/// 节点日志 - Trace 级别，用于记录 surface 写入
#[macro_export]
macro_rules! node_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "visual_node::node", $($arg)*)
    };
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
