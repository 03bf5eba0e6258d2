//! 结果输出

use crate::error::Result;
use crate::types::{OutputFormat, PublicUserInfo};
use serde::Serialize;

/// 凭据有效时的文本标题
pub const VALID_MESSAGE: &str = "Credentials are valid for user:";

/// 凭据无效时的提示，用户不存在与密码错误共用
pub const INVALID_MESSAGE: &str = "Invalid username or password";

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a PublicUserInfo>,
}

/// 渲染校验结果
pub fn render(outcome: Option<&PublicUserInfo>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => {
            let report = JsonReport {
                valid: outcome.is_some(),
                user: outcome,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

fn render_text(outcome: Option<&PublicUserInfo>) -> String {
    let Some(info) = outcome else {
        return INVALID_MESSAGE.to_string();
    };

    let mut lines = vec![VALID_MESSAGE.to_string()];
    lines.extend(
        info.fields()
            .iter()
            .map(|(key, value)| format!("  {}: {}", key, value)),
    );
    lines.join("\n")
}
