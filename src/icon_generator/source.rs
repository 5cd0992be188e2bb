//! # 输出变体数据模型
//!
//! ## 设计思路
//!
//! 将“要生成什么”与“怎么生成”解耦：
//! - `IconKind` 表示变体语义（标准 / 可遮罩 / Apple / favicon）
//! - `OutputEncoding` 表示落盘编码
//! - `IconVariant` 是 `IconConfig::plan_variants` 产出的静态生成计划中的一项

/// 图标变体类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// 标准 PWA 图标（`icon-{size}x{size}.png`）。
    Standard,
    /// 带安全区的可遮罩图标。
    Maskable,
    /// Apple touch icon。
    AppleTouch,
    /// 多分辨率 favicon。
    Favicon,
}

/// 输出文件编码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Png,
    Ico,
}

impl IconKind {
    pub fn encoding(self) -> OutputEncoding {
        match self {
            Self::Favicon => OutputEncoding::Ico,
            Self::Standard | Self::Maskable | Self::AppleTouch => OutputEncoding::Png,
        }
    }
}

/// 单个输出文件的生成计划。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconVariant {
    pub kind: IconKind,
    /// 输出文件名（相对输出目录）。
    pub file_name: String,
    /// 帧边长（像素）。PNG 只有一帧，ICO 按升序排列多帧。
    pub frame_sizes: Vec<u32>,
}

impl IconVariant {
    pub(crate) fn standard(size: u32) -> Self {
        Self {
            kind: IconKind::Standard,
            file_name: format!("icon-{size}x{size}.png"),
            frame_sizes: vec![size],
        }
    }

    pub(crate) fn maskable(size: u32) -> Self {
        Self {
            kind: IconKind::Maskable,
            file_name: format!("icon-{size}x{size}-maskable.png"),
            frame_sizes: vec![size],
        }
    }

    pub(crate) fn apple_touch(size: u32) -> Self {
        Self {
            kind: IconKind::AppleTouch,
            file_name: "apple-touch-icon.png".to_string(),
            frame_sizes: vec![size],
        }
    }

    pub(crate) fn favicon(sizes: &[u32]) -> Self {
        Self {
            kind: IconKind::Favicon,
            file_name: "favicon.ico".to_string(),
            frame_sizes: sizes.to_vec(),
        }
    }

    pub fn encoding(&self) -> OutputEncoding {
        self.kind.encoding()
    }

    /// 最大帧边长，PNG 变体即其唯一尺寸。
    pub fn largest_size(&self) -> u32 {
        self.frame_sizes.iter().copied().max().unwrap_or(0)
    }
}
