//! 错误处理模块

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 应用程序错误类型
///
/// 用户名不存在与密码错误都不属于错误，而是统一为"无匹配"结果。
/// 底层错误通过 `source()` 链提供，不重复写入消息。
#[derive(Error, Debug)]
pub enum AppError {
    #[error("用户库文件不存在: {}", path.display())]
    NotFound { path: PathBuf },

    /// `path` 为 `None` 表示内容并非来自文件
    #[error("无法解析用户库{}", path_suffix(path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("用户库结构错误: {0}")]
    Schema(String),

    #[error("用户记录不可用: {0}")]
    DataIntegrity(String),

    #[error("配置错误")]
    Config(#[from] config::ConfigError),

    #[error("配置无效: {0}")]
    Validation(String),

    #[error("序列化错误")]
    Serialization(#[from] serde_json::Error),

    #[error("IO错误")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 创建文件不存在错误
    pub fn not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 创建解析错误
    pub fn parse(path: Option<&Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.map(Path::to_path_buf),
            source,
        }
    }

    /// 创建结构错误
    pub fn schema<T: Into<String>>(msg: T) -> Self {
        Self::Schema(msg.into())
    }

    /// 创建数据完整性错误
    pub fn data_integrity<T: Into<String>>(msg: T) -> Self {
        Self::DataIntegrity(msg.into())
    }

    /// 创建验证错误
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

/// 应用程序Result类型
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::not_found("server/data/users.json");
        assert_eq!(err.to_string(), "用户库文件不存在: server/data/users.json");

        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = AppError::parse(Some(Path::new("users.json")), source);
        assert_eq!(err.to_string(), "无法解析用户库 users.json");
        assert!(std::error::Error::source(&err).is_some());

        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = AppError::parse(None, source);
        assert_eq!(err.to_string(), "无法解析用户库");

        let err = AppError::data_integrity("第 0 条记录缺少 passwordHash 字段");
        assert_eq!(err.to_string(), "用户记录不可用: 第 0 条记录缺少 passwordHash 字段");
    }
}
