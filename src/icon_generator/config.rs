//! # 配置模块
//!
//! ## 设计思路
//!
//! 所有路径、尺寸、颜色都是编译期常量，集中挂在 `IconConfig::default()` 上。
//! 命令行入口只使用默认值；保留结构体是为了让测试能把输入输出指向临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 即生产配置（`public/assets/logo/logo.jpg` → `public/`）。
//! - `validate` 在构造 `IconGenerator` 时执行，拒绝无法生成合法图标的组合。
//! - `plan_variants` 把尺寸表展开成有序的输出计划，生成器按计划逐项落盘。

use std::path::PathBuf;

use image::Rgba;
use image::codecs::png::CompressionType;
use image::imageops::FilterType;

use super::source::IconVariant;
use super::IconError;

/// 主题色 `#4CAF50`。
pub const BACKGROUND: Rgba<u8> = Rgba([76, 175, 80, 255]);

pub const STANDARD_SIZES: [u32; 8] = [512, 384, 192, 152, 144, 128, 96, 72];
pub const APPLE_TOUCH_SIZE: u32 = 180;
pub const MASKABLE_SIZE: u32 = 512;
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];

/// ICO 目录项的宽高字段只有一个字节，256 以 0 表示。
const ICO_MAX_DIMENSION: u32 = 256;

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源 Logo 路径。
    pub source_path: PathBuf,
    /// 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 画布与 favicon 的填充背景色。
    pub background: Rgba<u8>,
    /// 标准图标边长，按此顺序生成。
    pub standard_sizes: Vec<u32>,
    pub apple_touch_size: u32,
    pub maskable_size: u32,
    /// 可遮罩图标安全区占整图边长的比例。
    pub safe_zone_ratio: f32,
    /// favicon 帧边长，必须严格升序。
    pub favicon_sizes: Vec<u32>,
    /// 载入后的锐度增强系数，1.0 表示不增强。
    pub sharpness_factor: f32,
    pub resize_filter: FilterType,
    pub png_compression: CompressionType,
    /// 源文件体积上限（字节）。
    pub max_file_size: u64,
    /// 源图像素上限（`width * height`），在完整解码前检查。
    pub max_source_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("public/assets/logo/logo.jpg"),
            output_dir: PathBuf::from("public"),
            background: BACKGROUND,
            standard_sizes: STANDARD_SIZES.to_vec(),
            apple_touch_size: APPLE_TOUCH_SIZE,
            maskable_size: MASKABLE_SIZE,
            safe_zone_ratio: 0.75,
            favicon_sizes: FAVICON_SIZES.to_vec(),
            sharpness_factor: 1.2,
            resize_filter: FilterType::Lanczos3,
            png_compression: CompressionType::Best,
            max_file_size: 50 * 1024 * 1024,
            max_source_pixels: 40_000_000,
        }
    }
}

impl IconConfig {
    /// 可遮罩图标内 Logo 的边长（向下取整）。
    pub fn safe_zone_size(&self) -> u32 {
        (self.maskable_size as f64 * self.safe_zone_ratio as f64).floor() as u32
    }

    /// 校验配置组合是否能生成合法图标。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.standard_sizes.is_empty() {
            return Err(IconError::InvalidConfig("标准图标尺寸列表不能为空".to_string()));
        }

        let has_zero_size = self
            .standard_sizes
            .iter()
            .chain(self.favicon_sizes.iter())
            .copied()
            .chain([self.apple_touch_size, self.maskable_size])
            .any(|size| size == 0);
        if has_zero_size {
            return Err(IconError::InvalidConfig("图标尺寸不能为 0".to_string()));
        }

        if !(self.safe_zone_ratio > 0.0 && self.safe_zone_ratio <= 1.0) {
            return Err(IconError::InvalidConfig(format!(
                "safe_zone_ratio 必须在 (0, 1] 之间：{}",
                self.safe_zone_ratio
            )));
        }
        if self.safe_zone_size() == 0 {
            return Err(IconError::InvalidConfig(format!(
                "安全区尺寸为 0（maskable_size={}, ratio={}）",
                self.maskable_size, self.safe_zone_ratio
            )));
        }

        if self.favicon_sizes.is_empty() {
            return Err(IconError::InvalidConfig("favicon 尺寸列表不能为空".to_string()));
        }
        if let Some(size) = self
            .favicon_sizes
            .iter()
            .find(|size| **size > ICO_MAX_DIMENSION)
        {
            return Err(IconError::InvalidConfig(format!(
                "favicon 帧尺寸 {} 超过 ICO 上限 {}",
                size, ICO_MAX_DIMENSION
            )));
        }
        if self.favicon_sizes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(IconError::InvalidConfig(format!(
                "favicon 帧尺寸必须严格升序：{:?}",
                self.favicon_sizes
            )));
        }

        if !self.sharpness_factor.is_finite() || self.sharpness_factor < 0.0 {
            return Err(IconError::InvalidConfig(format!(
                "sharpness_factor 必须是非负有限数：{}",
                self.sharpness_factor
            )));
        }

        Ok(())
    }

    /// 展开输出计划：标准图标 → 可遮罩图标 → Apple touch icon → favicon。
    pub fn plan_variants(&self) -> Vec<IconVariant> {
        let mut variants: Vec<IconVariant> = self
            .standard_sizes
            .iter()
            .map(|size| IconVariant::standard(*size))
            .collect();

        variants.push(IconVariant::maskable(self.maskable_size));
        variants.push(IconVariant::apple_touch(self.apple_touch_size));
        variants.push(IconVariant::favicon(&self.favicon_sizes));
        variants
    }
}
