//! # PWA 图标生成器 — 命令行入口
//!
//! 无参数运行：读取 `public/assets/logo/logo.jpg`，把整套图标写到 `public/`。
//! 日志级别由 `RUST_LOG` 控制，默认 `info`。

use std::io::Write;
use std::process::ExitCode;

use pwa_icon_generator::error::AppError;
use pwa_icon_generator::icon_generator::IconConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match generate_and_report() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_missing_source() {
                log::error!("源 Logo 缺失，未生成任何文件");
            } else {
                log::error!("图标生成中止: {err}");
            }
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate_and_report() -> Result<(), AppError> {
    let report = pwa_icon_generator::run(IconConfig::default())?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{report}")?;
    stdout.flush()?;
    Ok(())
}
