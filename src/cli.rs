//! 命令行参数定义

use crate::types::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 离线登录校验：在 JSON 用户库中查找用户并校验密码
#[derive(Debug, Parser)]
#[command(name = "credcheck", version)]
pub struct Cli {
    /// 待校验的用户名
    #[arg(long)]
    pub username: String,

    /// 待校验的密码
    #[arg(long)]
    pub password: String,

    /// 用户库 JSON 文件路径 [默认: server/data/users.json]
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// 可选配置文件（JSON、TOML 或 YAML）
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 输出格式，覆盖配置文件中的 output.format（默认 text）
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 提高日志级别（-v info，-vv debug，-vvv trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
