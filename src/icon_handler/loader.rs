//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理本地文件的原始字节加载，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败，减少不必要内存与 CPU 消耗，同时保证失败发生在任何输出写入之前。
//!
//! ## 实现思路
//!
//! - 存在性 + metadata 体积限制 + 读取。
//! - 文件签名（`infer`）识别为非图片时直接拒绝。
//! - 先读 header 尺寸做像素上限检查，再完整解码。

use image::{GenericImageView, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::source::LoadedImage;
use super::{IconError, IconHandler};

impl IconHandler {
    /// 从本地路径加载并解码图片。
    pub fn load_image(&self, path: &Path) -> Result<LoadedImage, IconError> {
        let bytes = self.read_file_with_limit(path)?;
        Self::validate_image_signature(&bytes)?;

        let (header_width, header_height) = Self::inspect_dimensions(&bytes)?;
        self.validate_pixel_limits(header_width, header_height)?;

        let image = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
            .decode()
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(IconError::Decode(format!("图片尺寸无效：{}x{}", width, height)));
        }

        log::info!(
            "📖 读取图片：{} 颜色类型：{:?} 尺寸：{}x{}",
            path.display(),
            image.color(),
            width,
            height
        );

        Ok(LoadedImage {
            image,
            source_hint: path.display().to_string(),
        })
    }

    fn read_file_with_limit(&self, path: &Path) -> Result<Vec<u8>, IconError> {
        if !path.exists() {
            return Err(IconError::FileNotFound(path.display().to_string()));
        }

        let metadata = fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("读取文件信息失败：{}", e)))?;

        if !metadata.is_file() {
            return Err(IconError::FileSystem(format!(
                "路径不是普通文件：{}",
                path.display()
            )));
        }

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        fs::read(path).map_err(|e| IconError::FileSystem(format!("读取文件失败：{}", e)))
    }

    /// 文件签名校验。
    ///
    /// `infer` 无法识别的字节交给解码器判断；识别为非图片类型则直接拒绝。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::Decode("文件内容为空".to_string()));
        }

        if let Some(kind) = infer::get(bytes) {
            if kind.matcher_type() != infer::MatcherType::Image {
                return Err(IconError::Decode(format!(
                    "文件签名不是图片类型：{}",
                    kind.mime_type()
                )));
            }
        }

        Ok(())
    }

    /// 仅通过图片头信息读取宽高，用于在完整解码前做像素限制检查。
    fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
            .into_dimensions()
            .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = u64::from(width) * u64::from(height);

        if pixels > self.config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
