//! # 中间模型
//!
//! ## 设计思路
//!
//! 把流水线各阶段的产物拆成独立类型：
//! - `RawImageData`：已读入但未解码的字节
//! - `DecodedImage`：已解码并统一为 RGBA8 的源图
//! - `SafeAreaReport`：一次处理结束后的可序列化摘要

use std::path::PathBuf;

use image::RgbaImage;
use serde::Serialize;

use super::SafeAreaLayout;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) origin: PathBuf,
}

/// 解码阶段输出：RGBA8 源图。
pub(crate) struct DecodedImage {
    pub(crate) pixels: RgbaImage,
    /// 解码前文件体积（字节）。
    pub(crate) file_size: u64,
}

/// 处理结果摘要。
#[derive(Debug, Clone, Serialize)]
pub struct SafeAreaReport {
    /// 源图路径。
    pub source: PathBuf,
    /// 输出路径。
    pub destination: PathBuf,
    /// 源图原始宽高；跳过时为 `None`。
    pub source_dimensions: Option<(u32, u32)>,
    /// 版式结果；跳过时为 `None`。
    pub layout: Option<SafeAreaLayout>,
    /// 写出的 PNG 字节数；跳过时为 0。
    pub output_bytes: u64,
    /// 输出已是最新而跳过处理。
    pub skipped: bool,
}

impl SafeAreaReport {
    pub(crate) fn skipped(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
            source_dimensions: None,
            layout: None,
            output_bytes: 0,
            skipped: true,
        }
    }
}
