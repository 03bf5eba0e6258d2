//! 凭据校验 - 查找用户并校验密码

use crate::auth::password_service::PasswordService;
use crate::error::Result;
use crate::store::UserStore;
use crate::types::PublicUserInfo;

/// 凭据校验器
#[derive(Debug, Clone, Default)]
pub struct CredentialVerifier {
    passwords: PasswordService,
}

impl CredentialVerifier {
    /// 创建新的校验器实例
    pub fn new() -> Self {
        Self {
            passwords: PasswordService::new(),
        }
    }

    /// 校验用户名与密码
    ///
    /// 用户名先转为小写，再按存储顺序取第一条匹配记录。用户不存在和密码
    /// 错误都返回 `Ok(None)`，调用方无法区分两者。匹配记录缺少或损坏的
    /// 哈希返回错误。
    pub fn verify(
        &self,
        store: &UserStore,
        username: &str,
        password: &str,
    ) -> Result<Option<PublicUserInfo>> {
        let normalized = username.to_lowercase();

        for record in store.records() {
            let record = record?;
            if !record.matches(&normalized) {
                continue;
            }

            let stored_hash = record.password_hash()?;
            log::debug!("使用第 {} 条记录校验凭据", record.index());

            if self.passwords.verify(password, stored_hash)? {
                return Ok(Some(record.to_public()));
            }
            return Ok(None);
        }

        Ok(None)
    }
}
