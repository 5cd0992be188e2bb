//! # 像素变换流水线模块
//!
//! ## 设计思路
//!
//! 所有像素级操作都是纯函数：输入借用、输出新缓冲，源图与共享画布始终不被修改。
//!
//! ## 实现思路
//!
//! 1. 锐度增强：与平滑版本做外插混合
//! 2. 正方形画布：背景色填充 + 居中 alpha 合成
//! 3. 缩放：优先 `fast_image_resize`，失败时回退 `image::imageops::resize`
//! 4. 锐化：固定 3x3 卷积核，边缘像素保持原值
//! 5. 可遮罩图标：安全区居中贴回新画布
//! 6. favicon：按 alpha 压平到不透明 RGB

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use super::{IconError, IconGenerator};

/// 锐化核 `[-2 -2 -2; -2 32 -2; -2 -2 -2] / 16`，系数和为 1。
const SHARPEN_KERNEL: [f32; 9] = [
    -0.125, -0.125, -0.125, //
    -0.125, 2.0, -0.125, //
    -0.125, -0.125, -0.125,
];

/// 平滑核 `[1 1 1; 1 5 1; 1 1 1] / 13`，锐度增强的参照图。
const SMOOTH_KERNEL: [f32; 9] = [
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    5.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
];

impl IconGenerator {
    /// 锐度增强：`smooth + factor × (image − smooth)`，仅作用于颜色通道。
    pub(super) fn enhance_sharpness(image: &RgbaImage, factor: f32) -> RgbaImage {
        if (factor - 1.0).abs() <= f32::EPSILON {
            return image.clone();
        }

        let smooth = Self::convolve_keeping_edges(image, &SMOOTH_KERNEL);
        let mut enhanced = image.clone();

        for (pixel, base) in enhanced.pixels_mut().zip(smooth.pixels()) {
            for channel in 0..3 {
                let base_value = base.0[channel] as f32;
                let value = base_value + factor * (pixel.0[channel] as f32 - base_value);
                pixel.0[channel] = value.round().clamp(0.0, 255.0) as u8;
            }
        }

        enhanced
    }

    /// 生成边长为 `max(width, height)` 的背景画布，并把源图居中合成上去。
    pub(super) fn compose_square_canvas(image: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
        let (width, height) = image.dimensions();
        let side = width.max(height);

        let mut canvas = RgbaImage::from_pixel(side, side, background);
        let offset_x = (side - width) / 2;
        let offset_y = (side - height) / 2;
        imageops::overlay(&mut canvas, image, offset_x as i64, offset_y as i64);

        canvas
    }

    /// 缩放到 `size × size`。
    pub(super) fn resize_square(
        canvas: &RgbaImage,
        size: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, IconError> {
        if canvas.dimensions() == (size, size) {
            return Ok(canvas.clone());
        }

        log::debug!(
            "🧩 缩放：{}x{} -> {}x{}（filter={:?}）",
            canvas.width(),
            canvas.height(),
            size,
            size,
            filter
        );

        match Self::resize_with_fast_image_resize(canvas, size, size, filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
                Ok(imageops::resize(canvas, size, size, filter))
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
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

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
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

    /// 一次固定核锐化。
    pub(super) fn sharpen(image: &RgbaImage) -> RgbaImage {
        Self::convolve_keeping_edges(image, &SHARPEN_KERNEL)
    }

    /// 3x3 卷积，最外一圈像素保持原值（卷积窗口放不下）。
    fn convolve_keeping_edges(image: &RgbaImage, kernel: &[f32; 9]) -> RgbaImage {
        let (width, height) = image.dimensions();
        if width < 3 || height < 3 {
            return image.clone();
        }

        let mut filtered: RgbaImage = imageops::filter3x3(image, kernel);

        for x in 0..width {
            filtered.put_pixel(x, 0, *image.get_pixel(x, 0));
            filtered.put_pixel(x, height - 1, *image.get_pixel(x, height - 1));
        }
        for y in 1..height - 1 {
            filtered.put_pixel(0, y, *image.get_pixel(0, y));
            filtered.put_pixel(width - 1, y, *image.get_pixel(width - 1, y));
        }

        filtered
    }

    /// 新建 `size × size` 背景画布，把安全区内容居中合成上去。
    pub(super) fn place_in_safe_zone(
        safe_zone: &RgbaImage,
        size: u32,
        background: Rgba<u8>,
    ) -> RgbaImage {
        let mut maskable = RgbaImage::from_pixel(size, size, background);
        let offset_x = size.saturating_sub(safe_zone.width()) / 2;
        let offset_y = size.saturating_sub(safe_zone.height()) / 2;
        imageops::overlay(&mut maskable, safe_zone, offset_x as i64, offset_y as i64);
        maskable
    }

    /// 按 alpha 把像素压平到不透明背景上。
    pub(super) fn flatten_onto_background(image: &RgbaImage, background: Rgba<u8>) -> RgbImage {
        RgbImage::from_fn(image.width(), image.height(), |x, y| {
            let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
            let alpha = a as f32 / 255.0;
            let mix = |fg: u8, bg: u8| -> u8 {
                (fg as f32 * alpha + bg as f32 * (1.0 - alpha))
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            Rgb([
                mix(r, background.0[0]),
                mix(g, background.0[1]),
                mix(b, background.0[2]),
            ])
        })
    }
}
