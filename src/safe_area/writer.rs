//! # PNG 写出模块
//!
//! ## 实现思路
//!
//! 1. 目标目录不存在时自动 `create_dir_all`
//! 2. 在内存中完成 PNG 编码（RGBA8、自适应行过滤、按档位压缩）
//! 3. 先写同目录临时文件，再 `rename` 覆盖目标；写入或重命名失败都会删掉临时文件，
//!    目标路径上不会留下半截文件

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::{FilterType as PngFilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::{PngCompression, SafeAreaError, SafeAreaHandler};

impl SafeAreaHandler {
    /// 编码并写出画布，返回写入的字节数。
    pub(super) fn write_png(
        &self,
        canvas: &RgbaImage,
        destination: &Path,
        compression: PngCompression,
    ) -> Result<u64, SafeAreaError> {
        Self::ensure_parent_dir(destination)?;

        let encoded = Self::encode_png(canvas, compression)?;
        let staging = Self::staging_path(destination)?;

        Self::write_staging(&staging, &encoded)?;

        if let Err(e) = fs::rename(&staging, destination) {
            Self::discard_staging(&staging);
            return Err(SafeAreaError::Io(format!(
                "写入输出文件 '{}' 失败：{}",
                destination.display(),
                e
            )));
        }

        log::debug!(
            "💾 PNG 已写出 - 路径: {} 大小: {}KB 压缩: {}",
            destination.display(),
            encoded.len() / 1024,
            compression.as_str()
        );

        Ok(encoded.len() as u64)
    }

    fn write_staging(staging: &Path, encoded: &[u8]) -> Result<(), SafeAreaError> {
        fs::write(staging, encoded).map_err(|e| {
            Self::discard_staging(staging);
            SafeAreaError::Io(format!("写入临时文件 '{}' 失败：{}", staging.display(), e))
        })
    }

    fn discard_staging(staging: &Path) {
        match fs::remove_file(staging) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                log::warn!("⚠️ 清理临时文件失败 '{}'：{}", staging.display(), err);
            }
        }
    }

    fn ensure_parent_dir(destination: &Path) -> Result<(), SafeAreaError> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SafeAreaError::Io(format!("创建输出目录 '{}' 失败：{}", parent.display(), e))
                })?;
            }
        }
        Ok(())
    }

    fn encode_png(canvas: &RgbaImage, compression: PngCompression) -> Result<Vec<u8>, SafeAreaError> {
        let mut encoded = Vec::new();
        PngEncoder::new_with_quality(
            &mut encoded,
            compression.compression_type(),
            PngFilterType::Adaptive,
        )
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| SafeAreaError::Io(format!("PNG 编码失败：{}", e)))?;

        Ok(encoded)
    }

    /// 目标文件同目录下的临时文件路径，保证 `rename` 不跨文件系统。
    fn staging_path(destination: &Path) -> Result<PathBuf, SafeAreaError> {
        let file_name = destination.file_name().ok_or_else(|| {
            SafeAreaError::Io(format!("输出路径缺少文件名：{}", destination.display()))
        })?;

        let mut staging_name = OsString::from(".");
        staging_name.push(file_name);
        staging_name.push(format!(".{}.tmp", std::process::id()));

        Ok(destination.with_file_name(staging_name))
    }
}
