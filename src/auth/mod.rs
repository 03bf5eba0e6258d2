//! 认证模块

pub mod password_service;
pub mod verifier;

// 重新导出主要组件
pub use password_service::PasswordService;
pub use verifier::CredentialVerifier;
