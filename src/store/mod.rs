//! 用户库模块 - 读取静态 JSON 用户文件

pub mod record;

pub use record::UserRecord;

use crate::error::{AppError, Result};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// 内存中的用户库
///
/// 每次运行加载一次，只读，不回写。
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    records: Vec<Value>,
}

impl UserStore {
    /// 从文件加载用户库
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // 按字节读取，非法 UTF-8 由 serde_json 报告为解析错误
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::not_found(path)),
            Err(e) => return Err(e.into()),
        };

        let store = Self::from_slice(&content, Some(path))?;

        log::debug!("从 {} 加载了 {} 条用户记录", path.display(), store.len());
        Ok(store)
    }

    /// 从 JSON 文本构造用户库，根节点必须是数组
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_slice(content.as_bytes(), None)
    }

    fn from_slice(content: &[u8], path: Option<&Path>) -> Result<Self> {
        let root: Value =
            serde_json::from_slice(content).map_err(|e| AppError::parse(path, e))?;

        match root {
            Value::Array(records) => Ok(Self { records }),
            Value::Object(_) => Err(AppError::schema("应为用户对象列表，实际为单个对象")),
            other => Err(AppError::schema(format!(
                "应为用户对象列表，实际为 {}",
                other
            ))),
        }
    }

    /// 按存储顺序遍历记录视图
    ///
    /// 非对象记录在被访问到时才报错。
    pub fn records(&self) -> impl Iterator<Item = Result<UserRecord<'_>>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, value)| UserRecord::from_value(index, value))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
