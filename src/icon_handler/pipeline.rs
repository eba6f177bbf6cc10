//! # 缩放与编码流水线模块
//!
//! ## 设计思路
//!
//! 将“RGBA 画布 → 目标尺寸 → PNG 字节 → 文件”的过程集中管理。
//! 图标在小尺寸下对锯齿非常敏感，缩放固定走卷积滤镜（默认 Lanczos3）。
//!
//! ## 实现思路
//!
//! 1. 优先使用 `fast_image_resize` 执行卷积缩放
//! 2. 失败时回退 `image::imageops::resize`，保证结果可用
//! 3. PNG 在内存中完整编码后一次性写盘，编码失败不会留下半截文件

use fast_image_resize as fr;
use image::codecs::png::{FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage, imageops};
use std::fs;
use std::path::Path;

use super::{IconError, IconHandler};

impl IconHandler {
    /// 将图片精确缩放到 `size x size`。
    pub(crate) fn resize_to_square(
        &self,
        image: &DynamicImage,
        size: u32,
    ) -> Result<RgbaImage, IconError> {
        if size == 0 {
            return Err(IconError::InvalidConfig("目标尺寸不能为 0".to_string()));
        }

        let src = image.to_rgba8();
        let (width, height) = src.dimensions();

        log::info!(
            "🔄 缩放：{}x{} -> {}x{}（filter={:?}）",
            width,
            height,
            size,
            size,
            self.config.resize_filter
        );

        if (width, height) == (size, size) {
            return Ok(src);
        }

        match Self::resize_with_fast_image_resize(&src, size, size, self.config.resize_filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize：{}",
                    err
                );
                Ok(imageops::resize(&src, size, size, self.config.resize_filter))
            }
        }
    }

    fn resize_with_fast_image_resize(
        src: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }

    /// 在内存中编码为 PNG（最佳压缩 + 自适应行过滤）。
    pub(crate) fn encode_png(&self, image: &RgbaImage) -> Result<Vec<u8>, IconError> {
        let mut buffer = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut buffer,
            self.config.png_compression,
            PngFilterType::Adaptive,
        );

        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;

        Ok(buffer)
    }

    /// 编码并写入目标路径。
    pub(crate) fn write_png(&self, image: &RgbaImage, path: &Path) -> Result<(), IconError> {
        let bytes = self.encode_png(image)?;

        log::info!("💾 保存到：{}（{} KB）", path.display(), bytes.len() / 1024);

        fs::write(path, &bytes).map_err(|e| {
            IconError::FileSystem(format!("写入文件 '{}' 失败：{}", path.display(), e))
        })
    }
}
