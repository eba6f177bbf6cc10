//! # 应用图标裁剪工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码映射。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use app_icon_cropper::cli::{self, Args};
use app_icon_cropper::error::AppError;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help / --version 正常输出后以 0 退出
        Err(err) if !err.use_stderr() => {
            if let Err(print_err) = err.print() {
                log::warn!("输出帮助信息失败: {print_err}");
            }
            return ExitCode::SUCCESS;
        }
        Err(err) => return fail(AppError::from(err)),
    };

    match cli::run(&args) {
        Ok(icon_set) => {
            log::info!(
                "运行完成：共生成 {} 个图标，目录 {}",
                icon_set.reports.len(),
                icon_set.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => fail(err),
    }
}

fn fail(err: AppError) -> ExitCode {
    match &err {
        AppError::Usage(usage) => eprint!("{usage}"),
        other => {
            log::error!("图标生成失败: {other}");
            eprintln!("❌ 错误：{other}");
        }
    }
    ExitCode::from(err.exit_code())
}
