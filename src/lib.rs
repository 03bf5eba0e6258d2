//! credcheck 离线登录校验工具
//!
//! 读取 JSON 用户库，按用户名查找记录，并用 bcrypt 加盐哈希校验密码：
//! - 用户名不区分大小写（仅规范化输入）
//! - 用户不存在与密码错误返回相同结果
//! - 用户库损坏或匹配记录缺少哈希时直接报错

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod store;
pub mod types;

// 重新导出常用类型
pub use auth::{CredentialVerifier, PasswordService};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use store::{UserRecord, UserStore};
pub use types::{OutputFormat, PublicUserInfo};

/// 加载用户库并校验一次凭据，按配置的输出格式返回渲染结果
pub fn check(config: &AppConfig, username: &str, password: &str) -> Result<String> {
    let store = UserStore::load(&config.store.path)?;
    let outcome = CredentialVerifier::new().verify(&store, username, password)?;

    match &outcome {
        Some(_) => log::info!("✅ 凭据校验通过"),
        None => log::info!("❌ 凭据校验未通过"),
    }

    report::render(outcome.as_ref(), config.output.format)
}
