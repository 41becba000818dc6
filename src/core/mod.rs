//! 核心功能模块
//!
//! 与具体绘制后端无关的基础设施：数学辅助、日志、配置、场景描述和错误处理。
//!
//! # 模块组织
//!
//! - `math`：二维向量别名与角度换算
//! - `log`：日志系统，提供结构化的日志记录功能
//! - `config`：配置管理，支持从配置文件加载舞台设置
//! - `scene`：场景描述，列出初始节点
//! - `error`：错误处理，定义统一的错误类型

pub mod config;
pub mod error;
pub mod log;
pub mod math;
pub mod scene;

// 重新导出常用类型，方便使用
pub use config::{Config, LogLevel};
pub use error::{ConfigError, Result, VisualNodeError};
pub use math::{Vector2, Vector2i};
pub use scene::{NodeEntry, SceneConfig};
