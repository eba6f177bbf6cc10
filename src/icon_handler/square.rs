//! # 补方模块
//!
//! 将任意宽高比的图片居中放入边长为 `max(width, height)` 的正方形 RGBA 画布。
//! 偏移量向下取整，奇数差值多出的一像素落在右/下边的背景区。
//! 粘贴时以源图自身 alpha 合成，已透明的像素不会变为不透明。

use image::{DynamicImage, GenericImageView, RgbaImage, imageops};

use super::IconHandler;
use super::source::SquareCanvas;

impl IconHandler {
    /// 以配置中的背景色补齐为正方形画布。
    ///
    /// 合成方式为 source-over：透明画布上半透明像素保留原 alpha `a`，
    /// 而不是蒙版粘贴得到的 `a²/255`。裁边输出恒为不透明 RGB，CLI 链路不受影响。
    pub fn make_square_with_padding(&self, image: &DynamicImage) -> SquareCanvas {
        let (width, height) = image.dimensions();
        let side = width.max(height);
        let offset_x = (side - width) / 2;
        let offset_y = (side - height) / 2;

        let mut canvas = RgbaImage::from_pixel(side, side, self.config.background);
        let source = image.to_rgba8();
        imageops::overlay(&mut canvas, &source, i64::from(offset_x), i64::from(offset_y));

        log::info!(
            "📐 补齐为正方形：{}x{} -> {}x{}（偏移 {}, {}）",
            width,
            height,
            side,
            side,
            offset_x,
            offset_y
        );

        SquareCanvas {
            image: canvas,
            offset_x,
            offset_y,
        }
    }
}
