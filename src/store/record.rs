//! 用户记录视图

use crate::error::{AppError, Result};
use crate::types::{PublicUserInfo, DEFAULT_ROLE, DEFAULT_STATUS};
use serde_json::{Map, Value};

/// 用户库中单条记录的只读视图
///
/// 记录在加载时不做逐条校验，只有在查找过程中被访问到时才检查格式。
#[derive(Debug, Clone, Copy)]
pub struct UserRecord<'a> {
    index: usize,
    fields: &'a Map<String, Value>,
}

impl<'a> UserRecord<'a> {
    /// 从原始 JSON 值构造视图，非对象记录视为数据损坏
    pub fn from_value(index: usize, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { index, fields }),
            other => Err(AppError::data_integrity(format!(
                "第 {} 条记录不是对象（实际为 {}）",
                index,
                json_kind(other)
            ))),
        }
    }

    /// 记录在用户库中的位置
    pub fn index(&self) -> usize {
        self.index
    }

    /// 存储的用户名；非字符串用户名视为不存在
    pub fn username(&self) -> Option<&'a str> {
        self.fields.get("username").and_then(Value::as_str)
    }

    /// 用户名是否与已规范化的输入完全一致
    pub fn matches(&self, normalized: &str) -> bool {
        self.username() == Some(normalized)
    }

    /// 读取密码哈希
    ///
    /// 缺失、`null`、空字符串或非字符串都属于数据完整性错误。
    pub fn password_hash(&self) -> Result<&'a str> {
        match self.fields.get("passwordHash") {
            None | Some(Value::Null) => Err(self.integrity("缺少 passwordHash 字段")),
            Some(Value::String(hash)) if hash.is_empty() => {
                Err(self.integrity("的 passwordHash 字段为空"))
            }
            Some(Value::String(hash)) => Ok(hash),
            Some(other) => Err(self.integrity(&format!(
                "的 passwordHash 类型为 {}，应为 string",
                json_kind(other)
            ))),
        }
    }

    /// 生成公开信息投影，`role`/`status` 仅在缺失时取默认值
    pub fn to_public(&self) -> PublicUserInfo {
        PublicUserInfo {
            id: self.fields.get("id").cloned(),
            username: self.username().unwrap_or_default().to_string(),
            name: self.fields.get("name").cloned(),
            role: self.field_or("role", DEFAULT_ROLE),
            status: self.field_or("status", DEFAULT_STATUS),
            organization: self.fields.get("organization").cloned(),
        }
    }

    fn field_or(&self, key: &str, default: &str) -> Value {
        self.fields
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::String(default.to_string()))
    }

    fn integrity(&self, problem: &str) -> AppError {
        AppError::data_integrity(format!("第 {} 条记录{}", self.index, problem))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_record() {
        let value = json!(["alice"]);
        let err = UserRecord::from_value(3, &value).unwrap_err();

        assert!(matches!(err, AppError::DataIntegrity(_)));
        assert!(err.to_string().contains("第 3 条记录不是对象（实际为 array）"));
    }

    #[test]
    fn test_username_matching_is_exact() {
        let value = json!({"username": "Alice"});
        let record = UserRecord::from_value(0, &value).unwrap();

        // 存储值不做规范化
        assert!(!record.matches("alice"));
        assert!(record.matches("Alice"));

        let value = json!({"username": 7});
        let record = UserRecord::from_value(0, &value).unwrap();
        assert_eq!(record.username(), None);
        assert!(!record.matches("7"));
    }

    #[test]
    fn test_password_hash_checks() {
        for (value, expected) in [
            (json!({"username": "a"}), "缺少"),
            (json!({"username": "a", "passwordHash": null}), "缺少"),
            (json!({"username": "a", "passwordHash": ""}), "为空"),
            (json!({"username": "a", "passwordHash": 12}), "类型为 number"),
        ] {
            let record = UserRecord::from_value(0, &value).unwrap();
            let err = record.password_hash().unwrap_err();
            assert!(matches!(err, AppError::DataIntegrity(_)));
            assert!(err.to_string().contains(expected), "{}", err);
        }

        let value = json!({"username": "a", "passwordHash": "$2b$04$abc"});
        let record = UserRecord::from_value(0, &value).unwrap();
        assert_eq!(record.password_hash().unwrap(), "$2b$04$abc");
    }

    #[test]
    fn test_projection_defaults() {
        let value = json!({
            "username": "alice",
            "passwordHash": "$2b$04$abc",
            "role": "admin"
        });
        let record = UserRecord::from_value(0, &value).unwrap();
        let info = record.to_public();

        assert_eq!(info.id, None);
        assert_eq!(info.username, "alice");
        assert_eq!(info.name, None);
        assert_eq!(info.role, json!("admin"));
        assert_eq!(info.status, json!("active"));
        assert_eq!(info.organization, None);
    }

    #[test]
    fn test_projection_passthrough() {
        let value = json!({
            "id": "u-1",
            "username": "bob",
            "passwordHash": "$2b$04$abc",
            "name": "Bob",
            "role": "moderator",
            "status": "banned",
            "organization": {"school": "North"}
        });
        let record = UserRecord::from_value(0, &value).unwrap();
        let info = record.to_public();

        // 不限定角色和状态的取值范围
        assert_eq!(info.role, json!("moderator"));
        assert_eq!(info.status, json!("banned"));
        assert_eq!(info.id, Some(json!("u-1")));
        assert_eq!(info.organization, Some(json!({"school": "North"})));
    }
}
