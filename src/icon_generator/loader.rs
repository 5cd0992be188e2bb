//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 源 Logo 只读一次。所有校验都在创建输出目录之前完成，
//! 保证源图缺失或损坏时磁盘上不留下任何产物。
//!
//! ## 实现思路
//!
//! - 存在性 → metadata 体积限制 → 读取字节
//! - 签名识别 → header 尺寸 + 像素上限 → 完整解码
//! - 统一转换为 RGBA8，透明通道作为后续合成的遮罩

use std::io::Cursor;

use image::{GenericImageView, ImageReader, RgbaImage};

use super::{IconConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 读取并解码源 Logo。
    pub(super) fn load_source(&self) -> Result<RgbaImage, IconError> {
        let path = &self.config.source_path;
        log::info!("🎨 开始读取源 Logo - 路径: {}", path.display());

        if !path.is_file() {
            return Err(IconError::SourceNotFound(path.clone()));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "源文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取源文件：{}", e)))?;

        Self::decode_source(&bytes, &self.config)
    }

    /// 从内存字节解码为 RGBA 画面。
    pub(super) fn decode_source(bytes: &[u8], config: &IconConfig) -> Result<RgbaImage, IconError> {
        let format = image::guess_format(bytes)
            .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(IconError::Decode(format!("源图尺寸无效：{}x{}", width, height)));
        }

        log::info!(
            "✅ 源 Logo 解码成功 - 格式: {:?} 尺寸: {}x{} 透明通道: {}",
            format,
            width,
            height,
            decoded.color().has_alpha()
        );

        Ok(decoded.to_rgba8())
    }

    /// 仅通过图片头信息读取宽高，用于完整解码前的像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_source_pixels {
            return Err(IconError::ResourceLimit(format!(
                "源图像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_source_pixels
            )));
        }

        Ok(())
    }
}
