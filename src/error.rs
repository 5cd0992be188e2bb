//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 入口层只需要区分“成功”与“失败”，`AppError` 把图标流水线错误与
//! 终端输出错误收拢到一起，由 `main` 转换为非零退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，调用侧直接 `?`。

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（校验 / 解码 / 编码 / 写文件）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 终端输出失败
    #[error("输出汇总失败: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 源 Logo 缺失是唯一被单独识别的失败。
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::Icon(IconError::SourceNotFound(_)))
    }
}
