//! # 命令行驱动模块
//!
//! ## 设计思路
//!
//! 仅做参数适配与固定顺序编排，业务逻辑全部委托 `icon_handler`。
//! 生成顺序固定：主图标 → 自适应前景 → 通知图标（读取刚写出的主图标）。
//!
//! ## 实现思路
//!
//! - `clap` 负责位置参数解析，缺参/多参统一上转为 `AppError::Usage`。
//! - 输入不存在时在创建目录之前失败，保证不产生任何输出。
//! - 控制台进度行仅供人阅读，详细阶段信息走 `log`。

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::icon_handler::{IconConfig, IconHandler, IconTarget, RenderKind, RenderReport};
use crate::storage::{self, OUTPUT_DIR};

const BANNER_WIDTH: usize = 50;

/// 命令行参数：唯一的位置参数为输入图片路径。
#[derive(Debug, Parser)]
#[command(
    name = "app-icon-cropper",
    version,
    about = "裁掉白边并生成 1024/192 尺寸的应用图标",
    after_help = "示例：app-icon-cropper couple_logo.png"
)]
pub struct Args {
    /// 输入图片路径（任意常见位图格式）
    #[arg(value_name = "INPUT_IMAGE")]
    pub input: PathBuf,
}

/// clap 的解析错误（缺参/多参）统一视为用法错误。
impl From<clap::Error> for AppError {
    fn from(error: clap::Error) -> Self {
        AppError::Usage(error.render().to_string())
    }
}

/// 一次完整运行生成的图标集合。
#[derive(Debug, Clone)]
pub struct IconSet {
    pub output_dir: PathBuf,
    pub reports: Vec<RenderReport>,
}

/// 以固定输出目录 `assets/images` 运行。
pub fn run(args: &Args) -> Result<IconSet, AppError> {
    run_in(&args.input, Path::new(OUTPUT_DIR))
}

/// 以指定输出目录运行完整的三步生成流程。
pub fn run_in(input: &Path, output_dir: &Path) -> Result<IconSet, AppError> {
    if !input.exists() {
        return Err(AppError::InputNotFound(input.to_path_buf()));
    }

    let output_dir = storage::ensure_output_dir(output_dir)?;
    let handler = IconHandler::new(IconConfig::default())?;

    println!("🎨 应用图标处理器");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();

    let main_icon = output_dir.join(IconTarget::APP_ICON.file_name);
    let mut reports = Vec::with_capacity(IconTarget::ALL.len());

    for (index, target) in IconTarget::ALL.iter().enumerate() {
        println!(
            "{}. 正在生成{}（{}x{}）...",
            index + 1,
            target.label,
            target.size,
            target.size
        );

        let output = output_dir.join(target.file_name);
        let report = match target.kind {
            RenderKind::Full => handler.render(input, &output, target.size)?,
            RenderKind::Notification => {
                handler.render_notification(&main_icon, &output, target.size)?
            }
        };

        if report.content_found == Some(false) {
            println!("   ⚠️ 未检测到非白色内容，已使用原图");
        }
        println!("   ✅ 已生成：{}", output.display());
        println!();
        reports.push(report);
    }

    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("✨ 全部图标生成成功！");
    println!();
    println!("📁 已生成文件：");
    for info in storage::collect_output_info(&output_dir, &IconTarget::ALL) {
        println!("   • {}（{} KB）", info.path.display(), info.size / 1024);
    }
    println!();
    println!("🚀 下一步：运行平台图标工具（例如 'flutter pub run flutter_launcher_icons'）");

    Ok(IconSet {
        output_dir,
        reports,
    })
}
