//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconHandler` 只负责流程编排与配置持有，不直接与命令行绑定。
//! 完整处理链路固定为：
//! 1. 加载并校验源图片
//! 2. 裁掉白边（容差取自配置，默认 250）
//! 3. 居中补齐为正方形透明画布
//! 4. Lanczos3 缩放到目标尺寸
//! 5. PNG 编码并写盘
//!
//! 通知图标走独立的简化链路：只加载、缩放、编码，不裁边也不补方。
//!
//! ## 实现思路
//!
//! - 单线程同步执行，每个阶段生成新图像，上一阶段的图像随作用域释放。
//! - 记录 `load/process/encode/total` 阶段耗时，便于性能诊断。

use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::{IconConfig, IconError};

/// 图标处理器。
///
/// 封装了配置状态，并编排各子模块实现完整流程。
#[derive(Debug, Clone)]
pub struct IconHandler {
    pub(super) config: IconConfig,
}

/// 单次渲染的结果摘要。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub output: PathBuf,
    pub size: u32,
    /// 是否检测到非白色内容；通知图标链路不做检测，恒为 `None`。
    pub content_found: Option<bool>,
}

impl IconHandler {
    /// 根据配置创建处理器，配置非法时直接返回错误。
    ///
    /// # 示例
    /// ```rust
    /// use app_icon_cropper::icon_handler::{IconConfig, IconHandler};
    ///
    /// let handler = IconHandler::new(IconConfig::default())?;
    /// assert_eq!(handler.config().tolerance, 250);
    /// # Ok::<(), app_icon_cropper::icon_handler::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 生成完整图标：裁边 → 补方 → 缩放 → 编码。
    ///
    /// 输入不存在返回 `FileNotFound`，无法解码返回 `Decode`；
    /// 任一阶段失败时不会写出任何文件。
    pub fn render(
        &self,
        input: &Path,
        output: &Path,
        size: u32,
    ) -> Result<RenderReport, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let loaded = self.load_image(input)?;
        let load_elapsed = load_start.elapsed();

        let process_start = Instant::now();
        log::info!("✂️ 裁剪白边：{}", loaded.source_hint);
        let trimmed = self.trim_white_borders(&loaded.image, self.config.tolerance);
        drop(loaded);

        let content_found = trimmed.found_content();
        let square = self.make_square_with_padding(&DynamicImage::ImageRgb8(trimmed.image));
        let resized = self.resize_to_square(&DynamicImage::ImageRgba8(square.image), size)?;
        let process_elapsed = process_start.elapsed();

        let encode_start = Instant::now();
        self.write_png(&resized, output)?;
        let encode_elapsed = encode_start.elapsed();

        log::info!(
            "✅ 图标生成完成：{} 耗时 load={}ms process={}ms encode={}ms total={}ms",
            output.display(),
            load_elapsed.as_millis(),
            process_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(RenderReport {
            output: output.to_path_buf(),
            size,
            content_found: Some(content_found),
        })
    }

    /// 生成通知图标：输入应已是正方形（通常为刚写出的主图标），直接缩放。
    pub fn render_notification(
        &self,
        input: &Path,
        output: &Path,
        size: u32,
    ) -> Result<RenderReport, IconError> {
        let start = Instant::now();

        let loaded = self.load_image(input)?;
        if loaded.image.width() != loaded.image.height() {
            log::warn!(
                "⚠️ 通知图标输入不是正方形：{}x{}，将被拉伸",
                loaded.image.width(),
                loaded.image.height()
            );
        }

        let resized = self.resize_to_square(&loaded.image, size)?;
        self.write_png(&resized, output)?;

        log::info!(
            "✅ 通知图标生成完成：{} 耗时 {}ms",
            output.display(),
            start.elapsed().as_millis()
        );

        Ok(RenderReport {
            output: output.to_path_buf(),
            size,
            content_found: None,
        })
    }
}
