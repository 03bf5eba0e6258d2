//! 密码服务模块 - 校验 bcrypt 加盐哈希

use crate::error::{AppError, Result};

/// 密码服务
///
/// 只做校验，不生成或轮换哈希。摘要比较由 bcrypt 以常数时间完成。
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    /// 创建新的密码服务实例
    pub fn new() -> Self {
        Self
    }

    /// 校验明文密码与存储的哈希
    ///
    /// 哈希本身无法解析时返回数据完整性错误；摘要不一致返回 `Ok(false)`。
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool> {
        bcrypt::verify(password.as_bytes(), stored_hash).map_err(|e| {
            AppError::data_integrity(format!(
                "存储的 passwordHash 不是有效的 bcrypt 哈希: {}",
                e
            ))
        })
    }
}
