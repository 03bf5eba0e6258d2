//! 配置管理模块
//!
//! 配置按层叠加：内置默认值 → 可选配置文件 → 命令行参数。

use crate::error::{AppError, Result};
use crate::types::OutputFormat;
use config::{Config, File};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 默认用户库路径（相对于仓库根目录）
pub const DEFAULT_STORE_PATH: &str = "server/data/users.json";

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 应用程序配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 用户库配置
    pub store: StoreConfig,
    /// 日志配置
    pub log: LogConfig,
    /// 输出配置
    pub output: OutputConfig,
}

/// 用户库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 用户库文件路径
    pub path: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别 (off/error/warn/info/debug/trace)
    pub level: String,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 输出格式 (text/json)
    pub format: OutputFormat,
}

impl AppConfig {
    /// 加载配置，`path` 为 `None` 时只使用默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("store.path", DEFAULT_STORE_PATH)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .set_default("output.format", OutputFormat::default().as_str())?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        if self.store.path.as_os_str().is_empty() {
            return Err(AppError::validation("store.path 不能为空"));
        }

        self.level_filter()?;
        Ok(())
    }

    /// 命令行参数覆盖配置文件
    ///
    /// `verbosity` 为 `-v` 出现的次数，0 表示沿用配置中的级别。
    pub fn apply_overrides(
        &mut self,
        store: Option<PathBuf>,
        format: Option<OutputFormat>,
        verbosity: u8,
    ) {
        if let Some(store) = store {
            self.store.path = store;
        }
        if let Some(format) = format {
            self.output.format = format;
        }

        let level = match verbosity {
            0 => return,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        self.log.level = level.as_str().to_lowercase();
    }

    /// 解析日志级别
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log.level)
            .map_err(|_| AppError::validation(format!("未知的日志级别 '{}'", self.log.level)))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                path: PathBuf::from(DEFAULT_STORE_PATH),
            },
            log: LogConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::default(),
            },
        }
    }
}
