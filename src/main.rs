//! credcheck - 主程序入口

use anyhow::Context;
use clap::Parser;
use credcheck::{cli::Cli, AppConfig};
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // 单行诊断信息，包含完整错误链
            eprintln!("错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// 解析配置、加载用户库并校验一次凭据
fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = AppConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("加载配置文件 {} 失败", path.display()),
        None => "加载默认配置失败".to_string(),
    })?;
    config.apply_overrides(cli.store, cli.format, cli.verbose);

    init_logger(config.level_filter()?);
    log::info!("📖 用户库: {}", config.store.path.display());
    log::debug!("🖨️  输出格式: {}", config.output.format.as_str());

    let output = credcheck::check(&config, &cli.username, &cli.password)?;
    Ok(output)
}

/// 初始化日志记录器，日志写入 stderr，不影响标准输出中的结果
fn init_logger(level: LevelFilter) {
    // 重复初始化（如测试中多次调用 run）时保留已有的记录器
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .try_init();

    log::debug!("📝 日志级别: {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["credcheck"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_with_store_override() {
        let hash = bcrypt::hash("secret", 4).unwrap();
        let mut store = NamedTempFile::new().unwrap();
        store
            .write_all(json!([{"username": "alice", "passwordHash": hash}]).to_string().as_bytes())
            .unwrap();
        let path = store.path().to_str().unwrap();

        let output = run(cli(&["--username", "alice", "--password", "secret", "--store", path]))
            .unwrap();
        assert!(output.starts_with("Credentials are valid for user:"));

        let output = run(cli(&["--username", "alice", "--password", "nope", "--store", path]))
            .unwrap();
        assert_eq!(output, "Invalid username or password");
    }

    #[test]
    fn test_run_with_missing_store() {
        let temp_file = NamedTempFile::new().unwrap();
        let missing = temp_file.path().to_str().unwrap().to_string() + ".missing";

        let err = run(cli(&["--username", "a", "--password", "b", "--store", missing.as_str()]))
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("用户库文件不存在"));
        assert!(!message.contains('\n'));
    }

    #[test]
    fn test_run_with_missing_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let missing = temp_file.path().to_str().unwrap().to_string() + ".missing.json";

        let err = run(cli(&["--username", "a", "--password", "b", "--config", missing.as_str()]))
            .unwrap_err();
        assert!(format!("{:#}", err).starts_with("加载配置文件"));
    }
}
