//! # 汇总报告
//!
//! 记录每个落盘文件，并以人类可读形式输出统计。报告仅供展示，不参与任何流程判断。

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::source::{IconKind, IconVariant};

/// 单个已生成文件。
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub variant: IconVariant,
    pub path: PathBuf,
}

/// 一次生成的结果汇总。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub icons: Vec<GeneratedIcon>,
    pub elapsed: Duration,
}

impl GenerationReport {
    pub(super) fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            icons: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub(super) fn record(&mut self, variant: IconVariant, path: PathBuf) {
        self.icons.push(GeneratedIcon { variant, path });
    }

    pub(super) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn total(&self) -> usize {
        self.icons.len()
    }

    pub fn count_of(&self, kind: IconKind) -> usize {
        self.icons
            .iter()
            .filter(|icon| icon.variant.kind == kind)
            .count()
    }

    fn sizes_of(&self, kind: IconKind) -> Vec<u32> {
        self.icons
            .iter()
            .filter(|icon| icon.variant.kind == kind)
            .flat_map(|icon| icon.variant.frame_sizes.iter().copied())
            .collect()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📱 已生成文件：")?;
        for icon in &self.icons {
            writeln!(f, "   ✓ {}", icon.variant.file_name)?;
        }

        writeln!(
            f,
            "\n✅ 已在 {}/ 生成 {} 个图标（{}ms）",
            self.output_dir.display(),
            self.total(),
            self.elapsed.as_millis()
        )?;
        writeln!(f, "\n📋 汇总：")?;
        writeln!(f, "   - 标准图标：{} 个尺寸", self.count_of(IconKind::Standard))?;

        let join = |sizes: Vec<u32>| {
            sizes
                .iter()
                .map(|size| size.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        if let Some(size) = self.sizes_of(IconKind::Maskable).first() {
            writeln!(f, "   - 可遮罩图标：{size}x{size}px")?;
        }
        if let Some(size) = self.sizes_of(IconKind::AppleTouch).first() {
            writeln!(f, "   - Apple Touch Icon：{size}x{size}px")?;
        }
        let favicon_sizes = self.sizes_of(IconKind::Favicon);
        if !favicon_sizes.is_empty() {
            write!(f, "   - Favicon：多尺寸 ICO（{}）", join(favicon_sizes))?;
        }

        Ok(())
    }
}
