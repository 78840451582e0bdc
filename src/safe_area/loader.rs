//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在解码之前尽可能早地失败：存在性 → metadata 体积 → 读取 → 文件签名。
//!
//! ## 实现思路
//!
//! - 路径必须指向一个普通文件，目录或悬空路径一律视为 `FileNotFound`。
//!   该检查由调用方（`cli::run` / `process`）先做，`load_from_file` 不再重复。
//! - 设置了 `max_file_size` 时，超限文件直接拒绝，不读入内存。
//! - 通过 magic bytes（`infer`）确认内容确实是图片。

use std::path::Path;

use super::source::RawImageData;
use super::{SafeAreaConfig, SafeAreaError, SafeAreaHandler};

impl SafeAreaHandler {
    /// 确认源路径指向一个已存在的文件。
    pub(crate) fn ensure_source_exists(path: &Path) -> Result<(), SafeAreaError> {
        if !path.is_file() {
            return Err(SafeAreaError::FileNotFound(path.display().to_string()));
        }
        Ok(())
    }

    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
        config: &SafeAreaConfig,
    ) -> Result<RawImageData, SafeAreaError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path)
            .map_err(|e| SafeAreaError::Io(format!("无法读取文件信息：{}", e)))?;

        if let Some(limit) = config.max_file_size {
            if metadata.len() > limit {
                return Err(SafeAreaError::ResourceLimit(format!(
                    "文件过大：{:.2} MB（限制：{:.2} MB）",
                    metadata.len() as f64 / 1024.0 / 1024.0,
                    limit as f64 / 1024.0 / 1024.0
                )));
            }
        }

        let bytes = std::fs::read(path)
            .map_err(|e| SafeAreaError::Io(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            origin: path.to_path_buf(),
        })
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), SafeAreaError> {
        if bytes.is_empty() {
            return Err(SafeAreaError::Io("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| SafeAreaError::Io("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(SafeAreaError::Io(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}
