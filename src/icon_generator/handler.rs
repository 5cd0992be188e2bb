//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，单阶段细节分别落在 `loader/pipeline/writer`。
//! 处理链路固定为：
//! 1. 存在性检查 + 载入源图（失败时不产生任何输出）
//! 2. 锐度增强
//! 3. 合成正方形画布（全部变体共享同一块画布）
//! 4. 按 `plan_variants` 逐项缩放、锐化、落盘
//!
//! ## 实现思路
//!
//! - 配置在构造时校验，运行期只读。
//! - 任一变体失败立即返回，不做逐项恢复。
//! - 记录 `load/compose/emit/total` 阶段耗时，便于诊断。

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use image::{RgbImage, RgbaImage};

use super::report::GenerationReport;
use super::source::{IconKind, IconVariant};
use super::{IconConfig, IconError};

/// 图标生成器。
pub struct IconGenerator {
    pub(super) config: IconConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器，配置非法时直接返回 `InvalidConfig`。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use pwa_icon_generator::icon_generator::{IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::default())?;
    /// let report = generator.generate()?;
    /// println!("{report}");
    /// # Ok::<(), pwa_icon_generator::icon_generator::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 处理主入口：生成整套图标并返回汇总报告。
    pub fn generate(&self) -> Result<GenerationReport, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = self.load_source()?;
        let load_elapsed = load_start.elapsed();

        let compose_start = Instant::now();
        let enhanced = Self::enhance_sharpness(&source, self.config.sharpness_factor);
        let canvas = Self::compose_square_canvas(&enhanced, self.config.background);
        let compose_elapsed = compose_start.elapsed();

        log::info!(
            "🖼️ 画布合成完成 - 源尺寸: {}x{} 画布边长: {}",
            source.width(),
            source.height(),
            canvas.width()
        );

        let emit_start = Instant::now();
        fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            IconError::FileSystem(format!(
                "创建输出目录 '{}' 失败：{}",
                self.config.output_dir.display(),
                e
            ))
        })?;

        let mut report = GenerationReport::new(self.config.output_dir.clone());
        for variant in self.config.plan_variants() {
            let path = self.emit_variant(&canvas, &variant)?;
            log::info!("   ✓ {}", variant.file_name);
            report.record(variant, path);
        }
        let emit_elapsed = emit_start.elapsed();

        let total_elapsed = total_start.elapsed();
        report.set_elapsed(total_elapsed);

        log::info!(
            "⏱️ 图标生成耗时 - load={}ms compose={}ms emit={}ms total={}ms",
            load_elapsed.as_millis(),
            compose_elapsed.as_millis(),
            emit_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(report)
    }

    /// 生成并写入单个变体，返回输出路径。
    fn emit_variant(&self, canvas: &RgbaImage, variant: &IconVariant) -> Result<PathBuf, IconError> {
        let path = self.config.output_dir.join(&variant.file_name);

        match variant.kind {
            IconKind::Standard | IconKind::AppleTouch => {
                let icon = self.render_square(canvas, variant.largest_size())?;
                Self::write_png(&icon, &path, self.config.png_compression)?;
            }
            IconKind::Maskable => {
                let safe_zone = self.render_square(canvas, self.config.safe_zone_size())?;
                let icon = Self::place_in_safe_zone(
                    &safe_zone,
                    variant.largest_size(),
                    self.config.background,
                );
                Self::write_png(&icon, &path, self.config.png_compression)?;
            }
            IconKind::Favicon => {
                let frames = variant
                    .frame_sizes
                    .iter()
                    .map(|size| -> Result<RgbImage, IconError> {
                        let frame = self.render_square(canvas, *size)?;
                        Ok(Self::flatten_onto_background(&frame, self.config.background))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::write_favicon(&frames, &path)?;
            }
        }

        Ok(path)
    }

    /// 缩放到 `size × size` 后做一次固定核锐化。
    fn render_square(&self, canvas: &RgbaImage, size: u32) -> Result<RgbaImage, IconError> {
        let resized = Self::resize_square(canvas, size, self.config.resize_filter)?;
        Ok(Self::sharpen(&resized))
    }
}
