//! 输出新鲜度检查
//!
//! 目标文件存在、修改时间不早于源文件、且 PNG 头部尺寸等于本次请求的画布边长时，
//! 视为“已是最新”，可以跳过重新生成。用于构建脚本反复调用时避免无意义的重编码。

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use image::ImageReader;

use crate::error::AppError;

/// 判断 `destination` 是否可以直接复用：不早于 `source`，且是 `canvas_size × canvas_size`。
///
/// # 返回
/// - `Ok(false)` — 目标不存在、不是普通文件、源文件更新，或尺寸与请求不符
/// - `Ok(true)` — 目标可直接复用
/// - `Err(AppError::Io)` — 无法读取 metadata / 修改时间
pub fn is_output_fresh(
    source: &Path,
    destination: &Path,
    canvas_size: u32,
) -> Result<bool, AppError> {
    let destination_meta = match fs::metadata(destination) {
        Ok(meta) => meta,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err.into()),
    };

    if !destination_meta.is_file() {
        return Ok(false);
    }

    let source_modified = fs::metadata(source)?.modified()?;
    let destination_modified = destination_meta.modified()?;

    if destination_modified < source_modified {
        return Ok(false);
    }

    Ok(output_dimensions(destination) == Some((canvas_size, canvas_size)))
}

/// 只读 PNG 头部拿到宽高；读不出来的输出一律当作需要重建。
fn output_dimensions(destination: &Path) -> Option<(u32, u32)> {
    let reader = ImageReader::open(destination)
        .and_then(|reader| reader.with_guessed_format())
        .ok()?;

    match reader.into_dimensions() {
        Ok(dimensions) => Some(dimensions),
        Err(err) => {
            log::debug!("🔍 无法读取已有输出尺寸 '{}'：{}", destination.display(), err);
            None
        }
    }
}
