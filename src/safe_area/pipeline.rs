//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 把“字节 → 图像 → RGBA → 目标尺寸”的过程集中管理，并在完整解码前先做像素上限检查，
//! 避免超大图片在解码阶段占满内存。
//!
//! ## 实现思路
//!
//! 1. 读取 header 尺寸，设置了像素上限时快速拒绝
//! 2. 完整解码并统一转为 RGBA8
//! 3. 用 `fast_image_resize` 缩放（借用源图缓冲，不复制）：`nearest` 走最近邻采样，
//!    其余滤镜做带 alpha 预乘的卷积；失败时回退 `image::imageops::resize`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;

use super::source::{DecodedImage, RawImageData};
use super::{SafeAreaConfig, SafeAreaError, SafeAreaHandler};

impl SafeAreaHandler {
    /// 将原始字节解码为 RGBA8 源图。
    pub(super) fn decode_source(
        &self,
        raw: RawImageData,
        config: &SafeAreaConfig,
    ) -> Result<DecodedImage, SafeAreaError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let file_size = raw.bytes.len() as u64;
        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| SafeAreaError::Io(format!("图片解码失败：{}", e)))?;
        let pixels = decoded.to_rgba8();

        log::info!(
            "✅ 源图解码成功 - 路径: {} 尺寸: {}x{}",
            raw.origin.display(),
            pixels.width(),
            pixels.height()
        );

        Ok(DecodedImage { pixels, file_size })
    }

    /// 仅通过图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), SafeAreaError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| SafeAreaError::Io(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| SafeAreaError::Io(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        config: &SafeAreaConfig,
        width: u32,
        height: u32,
    ) -> Result<(), SafeAreaError> {
        let Some(limit) = config.max_source_pixels else {
            return Ok(());
        };

        let pixels = u64::from(width) * u64::from(height);
        if pixels > limit {
            return Err(SafeAreaError::ResourceLimit(format!(
                "源图像素过大：{} 像素（限制：{} 像素）",
                pixels, limit
            )));
        }

        Ok(())
    }

    /// 将源图缩放为 `side × side` 的正方形（不保持宽高比）。
    pub(super) fn resize_to_square(
        &self,
        source: &RgbaImage,
        side: u32,
        filter: FilterType,
    ) -> RgbaImage {
        log::info!(
            "🧩 缩放内容：{}x{} -> {}x{}（filter={:?}）",
            source.width(),
            source.height(),
            side,
            side,
            filter
        );

        match Self::resize_with_fast_image_resize(source, side, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                image::imageops::resize(source, side, side, filter)
            }
        }
    }

    fn resize_with_fast_image_resize(
        source: &RgbaImage,
        side: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, SafeAreaError> {
        let src_image = fr::images::ImageRef::new(
            source.width(),
            source.height(),
            source.as_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| SafeAreaError::Io(format!("构建源图像视图失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(side, side, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(Self::to_fast_alg(filter));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| SafeAreaError::Io(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(side, side, dst_image.into_vec())
            .ok_or_else(|| SafeAreaError::Io("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_alg(filter: FilterType) -> fr::ResizeAlg {
        let convolution = match filter {
            FilterType::Nearest => return fr::ResizeAlg::Nearest,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        };
        fr::ResizeAlg::Convolution(convolution)
    }
}
