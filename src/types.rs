//! 系统类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 缺省角色
pub const DEFAULT_ROLE: &str = "student";

/// 缺省账号状态
pub const DEFAULT_STATUS: &str = "active";

/// 对外公开的用户信息（不含密码哈希）
///
/// 元数据字段原样透传，不做枚举校验。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicUserInfo {
    pub id: Option<Value>,
    pub username: String,
    pub name: Option<Value>,
    pub role: Value,
    pub status: Value,
    pub organization: Option<Value>,
}

impl PublicUserInfo {
    /// 按固定顺序列出字段，供文本输出使用
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); 6] {
        [
            ("id", FieldValue::Json(self.id.as_ref())),
            ("username", FieldValue::Text(&self.username)),
            ("name", FieldValue::Json(self.name.as_ref())),
            ("role", FieldValue::Json(Some(&self.role))),
            ("status", FieldValue::Json(Some(&self.status))),
            ("organization", FieldValue::Json(self.organization.as_ref())),
        ]
    }
}

/// 文本输出时的字段值
///
/// 字符串不带引号，缺失值与 `null` 显示为 `None`，其他值按 JSON 显示。
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Json(Option<&'a Value>),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Json(None) | FieldValue::Json(Some(Value::Null)) => write!(f, "None"),
            FieldValue::Json(Some(Value::String(s))) => write!(f, "{}", s),
            FieldValue::Json(Some(other)) => write!(f, "{}", other),
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 逐行 `key: value`
    #[default]
    Text,
    /// 单行 JSON 对象
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
