//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconConfig`，保证运行时行为可观测、可测试。
//! 命令行不暴露任何参数，CLI 始终使用 `Default`，其余取值只服务于测试与库调用。
//!
//! ## 实现思路
//!
//! - `Default` 提供与生产一致的参数（容差 250、留白 2%、透明背景、Lanczos3、最佳压缩）。
//! - `validate` 在流水线入口统一校验，避免非法参数在像素阶段才暴露。
//! - `IconTarget` 描述固定的三个输出文件（文件名 + 边长 + 渲染路径）。

use image::Rgba;
use image::codecs::png::CompressionType;
use image::imageops::FilterType;

use super::IconError;

/// 默认白色容差：三个通道都 `>=` 该值的像素视为白色背景。
pub const DEFAULT_TOLERANCE: u8 = 250;

/// 裁边留白占短边的比例。
pub const DEFAULT_PADDING_RATIO: f64 = 0.02;

/// 主图标与自适应前景的边长。
pub const APP_ICON_SIZE: u32 = 1024;

/// 通知图标边长。
pub const NOTIFICATION_ICON_SIZE: u32 = 192;

/// 图标处理配置。
///
/// 字段覆盖了加载、裁边、补方、缩放与编码五个阶段。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 白色判定容差（0~255）。
    pub tolerance: u8,
    /// 内容包围盒外扩留白比例，按 `min(width, height)` 计算并向下取整。
    pub padding_ratio: f64,
    /// 补方画布的背景色，默认完全透明。
    pub background: Rgba<u8>,
    /// 缩放滤镜，图标场景固定使用抗锯齿滤镜。
    pub resize_filter: FilterType,
    /// PNG 压缩级别。
    pub png_compression: CompressionType,
    /// 读取原始文件时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            padding_ratio: DEFAULT_PADDING_RATIO,
            background: Rgba([255, 255, 255, 0]),
            resize_filter: FilterType::Lanczos3,
            png_compression: CompressionType::Best,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl IconConfig {
    /// 校验配置取值范围。
    ///
    /// # 示例
    /// ```rust
    /// use app_icon_cropper::icon_handler::IconConfig;
    ///
    /// let config = IconConfig::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), IconError> {
        if !self.padding_ratio.is_finite() || !(0.0..0.5).contains(&self.padding_ratio) {
            return Err(IconError::InvalidConfig(format!(
                "padding_ratio 必须在 [0, 0.5) 之间：{}",
                self.padding_ratio
            )));
        }
        if self.max_file_size == 0 {
            return Err(IconError::InvalidConfig("max_file_size 不能为 0".to_string()));
        }
        if self.max_decoded_pixels == 0 {
            return Err(IconError::InvalidConfig("max_decoded_pixels 不能为 0".to_string()));
        }
        Ok(())
    }

    /// 按短边计算外扩留白像素数（向下取整）。
    pub(crate) fn padding_for(&self, width: u32, height: u32) -> u32 {
        (f64::from(width.min(height)) * self.padding_ratio).floor() as u32
    }
}

/// 输出图标的渲染路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// 完整流程：裁边 → 补方 → 缩放 → 编码。
    Full,
    /// 简化流程：直接缩放已生成的主图标。
    Notification,
}

/// 单个输出图标的描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub label: &'static str,
    pub file_name: &'static str,
    pub size: u32,
    pub kind: RenderKind,
}

impl IconTarget {
    pub const APP_ICON: Self = Self {
        label: "主图标",
        file_name: "app_icon.png",
        size: APP_ICON_SIZE,
        kind: RenderKind::Full,
    };

    pub const FOREGROUND: Self = Self {
        label: "自适应图标前景",
        file_name: "app_icon_foreground.png",
        size: APP_ICON_SIZE,
        kind: RenderKind::Full,
    };

    pub const NOTIFICATION: Self = Self {
        label: "通知图标",
        file_name: "notification_icon.png",
        size: NOTIFICATION_ICON_SIZE,
        kind: RenderKind::Notification,
    };

    /// 固定的生成顺序：通知图标依赖主图标，必须排在最后。
    pub const ALL: [Self; 3] = [Self::APP_ICON, Self::FOREGROUND, Self::NOTIFICATION];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = IconConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.tolerance, 250);
        assert_eq!(config.background[3], 0);
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
    }

    #[test]
    fn validate_rejects_bad_padding_ratio() {
        let mut config = IconConfig::default();

        config.padding_ratio = -0.1;
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.padding_ratio = f64::NAN;
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.padding_ratio = 0.5;
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let mut config = IconConfig::default();
        config.max_decoded_pixels = 0;

        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn padding_uses_shorter_side_and_floors() {
        let config = IconConfig::default();

        assert_eq!(config.padding_for(400, 200), 4);
        assert_eq!(config.padding_for(49, 1000), 0);
        assert_eq!(config.padding_for(150, 150), 3);
    }

    #[test]
    fn notification_target_runs_last() {
        let last = IconTarget::ALL[IconTarget::ALL.len() - 1];

        assert_eq!(last.kind, RenderKind::Notification);
        assert_eq!(last.size, 192);
        assert!(IconTarget::ALL[..2].iter().all(|t| t.size == 1024));
    }
}
