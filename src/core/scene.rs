//! 场景配置模块
//!
//! 描述舞台上的初始节点。每个节点条目就是一组 `NodeProps` 外加一个速度。
//!
//! ```toml
//! [layer]
//! name = "Sprites"
//! base_z_index = 100
//!
//! [[nodes]]
//! name = "Ship"
//! x = 2
//! y = 3
//! width = 6
//! height = 3
//! z_index = 1
//! velocity = [1, 0]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::component::NodeProps;
use crate::core::error::{ConfigError, Result};

/// 单个节点条目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeEntry {
    /// 初始属性
    #[serde(flatten)]
    pub props: NodeProps,

    /// 每帧位移 (dx, dy)
    #[serde(default)]
    pub velocity: [i32; 2],
}

/// 节点所在图层组
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default = "default_layer_name")]
    pub name: String,

    #[serde(default)]
    pub base_z_index: i32,
}

fn default_layer_name() -> String {
    "Layer".to_string()
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            name: default_layer_name(),
            base_z_index: 0,
        }
    }
}

/// 场景配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub layer: LayerConfig,

    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let entry = |name: &str, x, y, width, height, opacity, z_index, velocity| NodeEntry {
            props: NodeProps {
                name: Some(name.to_string()),
                x: Some(x),
                y: Some(y),
                width: Some(width),
                height: Some(height),
                opacity: Some(opacity),
                rotation: None,
                z_index: Some(z_index),
            },
            velocity,
        };

        Self {
            layer: LayerConfig::default(),
            nodes: vec![
                entry("Backdrop", 0, 12, 64, 8, 0.25, 0, [0, 0]),
                entry("Ship", 2, 4, 6, 3, 1.0, 2, [2, 0]),
                entry("Cloud", 40, 1, 12, 4, 0.5, 1, [-1, 0]),
            ],
        }
    }
}

impl SceneConfig {
    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse scene config: {}", e)).into()
        })
    }

    /// 从文件加载场景配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::FileNotFound(format!(
                "Failed to read scene config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&contents)
    }

    /// 从文件加载，如果文件不存在则返回默认场景
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded scene config from: {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to load scene config: {}, using defaults", e);
                    Self::default()
                }
            }
        } else {
            tracing::info!("Scene config not found, using defaults");
            Self::default()
        }
    }
}
