//! 图标流水线中间数据模型。

use image::{DynamicImage, RgbImage, RgbaImage};

/// 已加载并通过校验的源图片。
pub struct LoadedImage {
    pub image: DynamicImage,
    pub source_hint: String,
}

/// 内容包围盒，右/下边界为闭区间。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// 单个像素构成的包围盒。
    pub fn point(x: u32, y: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    /// 扩展包围盒以覆盖 `(x, y)`。
    pub fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x);
        self.bottom = self.bottom.max(y);
    }

    /// 四边外扩 `padding` 像素，并夹紧到 `width x height` 图像范围内。
    pub fn expand(self, padding: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width.saturating_sub(1)),
            bottom: self.bottom.saturating_add(padding).min(height.saturating_sub(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// 裁边结果。
///
/// 未检测到内容时 `content_bounds` 与 `crop_bounds` 均为 `None`，`image` 为原图（RGB）。
pub struct TrimOutcome {
    pub image: RgbImage,
    pub content_bounds: Option<BoundingBox>,
    pub crop_bounds: Option<BoundingBox>,
}

impl TrimOutcome {
    pub fn found_content(&self) -> bool {
        self.content_bounds.is_some()
    }
}

/// 补方结果：正方形 RGBA 画布及原图粘贴偏移。
pub struct SquareCanvas {
    pub image: RgbaImage,
    pub offset_x: u32,
    pub offset_y: u32,
}
