//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 图标生成链路只有“成功”与“中止”两种结果，所有失败来源统一收敛到 `IconError`。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧（主要是测试）可按分支匹配。

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 该类型会在入口层被上转为 `AppError`，最终以非零退出码结束进程。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源 Logo 不存在：{}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

