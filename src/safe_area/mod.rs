//! # 图标留白模块（safe_area）
//!
//! ## 设计思路
//!
//! macOS 会给应用图标套系统蒙版（圆角方形），内容贴边的源图在 Dock/Finder 里会显得更大更突兀。
//! 这里把源图缩小后居中贴到更大的透明画布上，给图标留出安全边距。
//!
//! 按职责拆分为多个子模块：
//!
//! - `config`：参数、默认值与校验
//! - `geometry`：内容尺寸与居中偏移的纯计算
//! - `loader`：存在性、体积、文件签名校验与读取
//! - `pipeline`：解码与缩放
//! - `compose`：透明画布与蒙版贴图
//! - `writer`：目录创建与 PNG 写出
//! - `handler`：编排整条流水线
//! - `error/source`：错误与中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! SafeAreaHandler::process
//!    ├─ loader.rs（存在性 + 体积 + 签名）
//!    ├─ pipeline.rs（解码 + 像素上限 + 缩放）
//!    ├─ geometry.rs（target / offset）
//!    ├─ compose.rs（透明画布 + 贴图）
//!    └─ writer.rs（建目录 + 编码 + 原子替换）
//! ```

mod compose;
mod config;
mod error;
mod geometry;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{
    CompositeMode, DEFAULT_CANVAS_SIZE, DEFAULT_CONTENT_SCALE, PngCompression, ResizeQuality,
    SafeAreaConfig,
};
pub use error::SafeAreaError;
pub use geometry::SafeAreaLayout;
pub use handler::SafeAreaHandler;
pub use source::SafeAreaReport;
