//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块把“源图校验 → 增强与合成 → 逐尺寸缩放锐化 → 落盘 → 汇总”
//! 按职责拆分为多个子模块，流程本身是一条只进不退的批处理流水线。
//!
//! - `config`：编译期常量与输出计划
//! - `source`：输出变体数据模型
//! - `handler`：编排整条流水线 + 阶段耗时日志
//! - `loader`：源文件存在性、体积、签名、像素上限校验与解码
//! - `pipeline`：锐度增强、正方形画布、缩放、锐化、安全区、压平
//! - `writer`：PNG / ICO 写出
//! - `report/error`：汇总报告与错误
//!
//! ## 调用链
//!
//! ```text
//! main.rs（日志初始化 + 退出码）
//!    ↓
//! handler.rs（IconGenerator::generate）
//!    ├─ loader.rs（存在性检查 + 解码，失败时不产生任何输出）
//!    ├─ pipeline.rs（增强 → 画布 → 每个变体缩放 + 锐化）
//!    └─ writer.rs（PNG / favicon.ico）
//!    ↓
//! report.rs（GenerationReport 打印到 stdout）
//! ```
//!
//! ## 不变量
//!
//! 所有变体都从同一块正方形画布派生，居中方式与背景色因此在各尺寸间完全一致。

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod report;
mod source;
mod writer;

pub use config::{
    APPLE_TOUCH_SIZE, BACKGROUND, FAVICON_SIZES, IconConfig, MASKABLE_SIZE, STANDARD_SIZES,
};
pub use error::IconError;
pub use handler::IconGenerator;
pub use report::{GeneratedIcon, GenerationReport};
pub use source::{IconKind, IconVariant, OutputEncoding};
