//! # 白边裁剪模块
//!
//! ## 设计思路
//!
//! 逐像素扫描找出“非白色内容”的最小包围盒，再按短边 2% 外扩留白后裁剪。
//! 白色判定为逐通道下界：三个通道都 `>= tolerance` 才算白色。
//!
//! ## 实现思路
//!
//! 1. 带 alpha 的图片先合成到不透明白底上（透明区域视为背景），否则直接转 RGB
//! 2. 单次行优先扫描累积包围盒，复杂度 O(width × height)
//! 3. 未找到内容时返回原图并告警，不视为错误
//! 4. 外扩留白并夹紧到图像边界，按闭区间裁剪

use image::{DynamicImage, Rgb, RgbImage, imageops};

use super::IconHandler;
use super::source::{BoundingBox, TrimOutcome};

impl IconHandler {
    /// 裁掉图片四周的白边。
    ///
    /// 留白比例取自配置，`tolerance` 由调用方显式传入。
    pub fn trim_white_borders(&self, image: &DynamicImage, tolerance: u8) -> TrimOutcome {
        let flattened = flatten_onto_white(image);
        let (width, height) = flattened.dimensions();

        let Some(content) = find_content_bounds(&flattened, tolerance) else {
            log::warn!("⚠️ 未检测到非白色内容，使用原图继续处理");
            return TrimOutcome {
                image: flattened,
                content_bounds: None,
                crop_bounds: None,
            };
        };

        let padding = self.config.padding_for(width, height);
        let crop = content.expand(padding, width, height);

        log::info!(
            "✂️ 裁剪区域：({}, {}) -> ({}, {})",
            crop.left,
            crop.top,
            crop.right,
            crop.bottom
        );
        log::info!(
            "   原始尺寸：{}x{} 裁剪后尺寸：{}x{}",
            width,
            height,
            crop.width(),
            crop.height()
        );

        let cropped =
            imageops::crop_imm(&flattened, crop.left, crop.top, crop.width(), crop.height())
                .to_image();

        TrimOutcome {
            image: cropped,
            content_bounds: Some(content),
            crop_bounds: Some(crop),
        }
    }
}

/// 去除 alpha：有透明通道时以 alpha 为蒙版合成到白底，否则直接转为 RGB。
pub(crate) fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([
            blend_over_white(r, a),
            blend_over_white(g, a),
            blend_over_white(b, a),
        ])
    })
}

fn blend_over_white(channel: u8, alpha: u8) -> u8 {
    let c = u32::from(channel);
    let a = u32::from(alpha);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// 计算所有内容像素的最小包围盒；全白时返回 `None`。
pub(crate) fn find_content_bounds(image: &RgbImage, tolerance: u8) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if !is_content(pixel, tolerance) {
            continue;
        }
        match bounds.as_mut() {
            Some(current) => current.include(x, y),
            None => bounds = Some(BoundingBox::point(x, y)),
        }
    }

    log::debug!("包围盒扫描完成：{:?}", bounds);
    bounds
}

#[inline]
fn is_content(pixel: &Rgb<u8>, tolerance: u8) -> bool {
    pixel.0.iter().any(|&channel| channel < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_handler::IconConfig;
    use image::{ImageBuffer, Rgba, RgbaImage};

    fn handler() -> IconHandler {
        IconHandler::new(IconConfig::default()).expect("handler init failed")
    }

    fn white(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
    }

    #[test]
    fn all_white_image_is_returned_unmodified() {
        for (width, height) in [(1, 1), (17, 5), (64, 64)] {
            let source = DynamicImage::ImageRgb8(white(width, height));

            let outcome = handler().trim_white_borders(&source, 250);

            assert!(!outcome.found_content());
            assert!(outcome.crop_bounds.is_none());
            assert_eq!(outcome.image.dimensions(), (width, height));
            assert_eq!(outcome.image, source.to_rgb8());
        }
    }

    #[test]
    fn single_pixel_box_expands_by_two_percent() {
        let mut img = white(200, 100);
        img.put_pixel(120, 40, Rgb([0, 0, 0]));

        let outcome = handler().trim_white_borders(&DynamicImage::ImageRgb8(img), 250);

        assert_eq!(outcome.content_bounds, Some(BoundingBox::point(120, 40)));
        assert_eq!(
            outcome.crop_bounds,
            Some(BoundingBox {
                left: 118,
                top: 38,
                right: 122,
                bottom: 42,
            })
        );
        assert_eq!(outcome.image.dimensions(), (5, 5));
        assert_eq!(outcome.image.get_pixel(2, 2), &Rgb([0, 0, 0]));
    }

    #[test]
    fn padding_is_clamped_at_image_corner() {
        let mut img = white(300, 300);
        img.put_pixel(0, 299, Rgb([10, 10, 10]));

        let outcome = handler().trim_white_borders(&DynamicImage::ImageRgb8(img), 250);

        assert_eq!(
            outcome.crop_bounds,
            Some(BoundingBox {
                left: 0,
                top: 293,
                right: 6,
                bottom: 299,
            })
        );
        assert_eq!(outcome.image.dimensions(), (7, 7));
    }

    #[test]
    fn tolerance_is_inclusive_per_channel() {
        let mut img = white(10, 10);
        img.put_pixel(2, 2, Rgb([250, 250, 250]));

        assert_eq!(find_content_bounds(&img, 250), None);

        img.put_pixel(7, 3, Rgb([255, 249, 255]));
        assert_eq!(find_content_bounds(&img, 250), Some(BoundingBox::point(7, 3)));
    }

    #[test]
    fn bounding_box_covers_all_content_pixels() {
        let mut img = white(50, 40);
        img.put_pixel(5, 30, Rgb([0, 0, 200]));
        img.put_pixel(44, 2, Rgb([200, 0, 0]));
        img.put_pixel(20, 20, Rgb([0, 200, 0]));

        assert_eq!(
            find_content_bounds(&img, 250),
            Some(BoundingBox {
                left: 5,
                top: 2,
                right: 44,
                bottom: 30,
            })
        );
    }

    #[test]
    fn transparent_regions_are_treated_as_white() {
        let img: RgbaImage = ImageBuffer::from_fn(40, 40, |x, y| {
            if (10..20).contains(&x) && (15..25).contains(&y) {
                Rgba([30, 30, 30, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let source = DynamicImage::ImageRgba8(img);
        assert_eq!(flatten_onto_white(&source).get_pixel(0, 0), &Rgb([255, 255, 255]));

        let outcome = handler().trim_white_borders(&source, 250);

        assert_eq!(
            outcome.content_bounds,
            Some(BoundingBox {
                left: 10,
                top: 15,
                right: 19,
                bottom: 24,
            })
        );
        assert_eq!(outcome.image.dimensions(), (10, 10));
        assert_eq!(outcome.image.get_pixel(0, 0), &Rgb([30, 30, 30]));
    }

    #[test]
    fn blend_over_white_matches_endpoints() {
        assert_eq!(blend_over_white(0, 0), 255);
        assert_eq!(blend_over_white(0, 255), 0);
        assert_eq!(blend_over_white(100, 255), 100);
        assert_eq!(blend_over_white(0, 128), 127);
    }
}
