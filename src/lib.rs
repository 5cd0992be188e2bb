//! # PWA 图标生成器 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! public/assets/logo/logo.jpg
//!         │
//!         ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  icon_generator                                          │
//! │                                                          │
//! │  loader ── 存在性 / 体积 / 签名 / 像素上限 → RGBA        │
//! │     ↓                                                    │
//! │  pipeline ── 锐度增强 → 正方形画布（共享）               │
//! │     ↓            ├─ 8 × 标准图标    缩放 + 锐化          │
//! │     ↓            ├─ 可遮罩图标      75% 安全区           │
//! │     ↓            ├─ Apple touch     180px                │
//! │     ↓            └─ favicon         16/32/48 压平        │
//! │  writer ── PNG（最高压缩） / ICO（多帧）                 │
//! └──────────────────────────────────────────────────────────┘
//!         │
//!         ▼
//!     public/（11 个文件）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，入口层的返回类型 |
//! | [`icon_generator`] | 从单张 Logo 生成整套 PWA 图标 |

pub mod error;
pub mod icon_generator;

use error::AppError;
use icon_generator::{GenerationReport, IconConfig, IconGenerator};

/// 按给定配置生成整套图标。
pub fn run(config: IconConfig) -> Result<GenerationReport, AppError> {
    let generator = IconGenerator::new(config)?;
    log::info!(
        "🎨 从 {} 生成 PWA 图标...",
        generator.config().source_path.display()
    );
    Ok(generator.generate()?)
}
