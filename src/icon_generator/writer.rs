//! # 落盘模块
//!
//! ## 设计思路
//!
//! PNG 统一走最高压缩 + 自适应行过滤（无损意义上的“optimize”）。
//! favicon 用 `ico` crate 组装多帧目录，帧顺序即写入顺序。
//! 目标文件已存在时直接覆盖。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, RgbImage, RgbaImage};

use super::{IconError, IconGenerator};

impl IconGenerator {
    pub(super) fn write_png(
        image: &RgbaImage,
        path: &Path,
        compression: CompressionType,
    ) -> Result<(), IconError> {
        let mut writer = Self::create_output(path)?;
        let encoder = PngEncoder::new_with_quality(&mut writer, compression, PngFilterType::Adaptive);

        image
            .write_with_encoder(encoder)
            .map_err(|e| IconError::Encode(format!("PNG 编码失败（{}）：{}", path.display(), e)))?;

        writer
            .flush()
            .map_err(|e| IconError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), e)))
    }

    /// 把多个不透明帧写成一个 ICO，帧顺序与传入顺序一致。
    pub(super) fn write_favicon(frames: &[RgbImage], path: &Path) -> Result<(), IconError> {
        let mut icon_dir = IconDir::new(ResourceType::Icon);

        for frame in frames {
            let (width, height) = frame.dimensions();
            let rgba = DynamicImage::ImageRgb8(frame.clone()).to_rgba8();
            let image = IconImage::from_rgba_data(width, height, rgba.into_raw());
            let entry = IconDirEntry::encode(&image).map_err(|e| {
                IconError::Encode(format!("ICO 帧 {}x{} 编码失败：{}", width, height, e))
            })?;
            icon_dir.add_entry(entry);
        }

        let mut writer = Self::create_output(path)?;
        icon_dir
            .write(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| IconError::Encode(format!("ICO 写入失败（{}）：{}", path.display(), e)))
    }

    fn create_output(path: &Path) -> Result<BufWriter<File>, IconError> {
        let file = File::create(path)
            .map_err(|e| IconError::FileSystem(format!("无法创建 '{}'：{}", path.display(), e)))?;
        Ok(BufWriter::new(file))
    }
}
