//! # 配置模块
//!
//! ## 设计思路
//!
//! 把一次留白处理涉及的全部可调参数集中到 `SafeAreaConfig`，
//! 命令行只负责把字符串翻译成这里的字段，校验逻辑统一放在 `validate`。
//!
//! ## 实现思路
//!
//! - `Default` 给出默认值（1024 / 0.88 / Lanczos3）。
//! - `ResizeQuality` / `CompositeMode` / `PngCompression` 负责档位字符串的解析与反向输出。
//! - `from_raw` 接收未校验的整数尺寸，负数同样落入 `InvalidArgument`，而不是被解析层吞掉。
//! - 体积、像素、画布三项上限默认关闭（`None`），只有显式设置时才会产生 `ResourceLimit`。

use image::codecs::png::CompressionType;
use image::imageops::FilterType;

use super::SafeAreaError;

/// 默认输出画布边长（像素）。
pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
/// 默认内容占画布的比例。
pub const DEFAULT_CONTENT_SCALE: f64 = 0.88;

/// 留白处理配置。
#[derive(Debug, Clone)]
pub struct SafeAreaConfig {
    /// 输出画布边长（正方形）。
    pub size: u32,
    /// 内容缩放比例，取值 `(0, 1]`。
    pub scale: f64,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 贴图混合方式。
    pub composite: CompositeMode,
    /// PNG 压缩档位。
    pub compression: PngCompression,
    /// 源文件体积上限（字节），`None` 表示不限制。
    pub max_file_size: Option<u64>,
    /// 源图解码像素上限（`width * height`），`None` 表示不限制。
    pub max_source_pixels: Option<u64>,
    /// 画布边长上限，`None` 表示不限制。
    pub max_canvas_size: Option<u32>,
}

impl Default for SafeAreaConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CANVAS_SIZE,
            scale: DEFAULT_CONTENT_SCALE,
            resize_filter: FilterType::Lanczos3,
            composite: CompositeMode::Mask,
            compression: PngCompression::Best,
            max_file_size: None,
            max_source_pixels: None,
            max_canvas_size: None,
        }
    }
}

impl SafeAreaConfig {
    /// 由未校验的尺寸与比例构建配置，其余字段取默认值。
    ///
    /// # 示例
    /// ```rust
    /// use icon_safearea::safe_area::SafeAreaConfig;
    ///
    /// let config = SafeAreaConfig::from_raw(512, 0.5)?;
    /// assert_eq!(config.size, 512);
    /// # Ok::<(), icon_safearea::safe_area::SafeAreaError>(())
    /// ```
    pub fn from_raw(size: i64, scale: f64) -> Result<Self, SafeAreaError> {
        if size <= 0 {
            return Err(SafeAreaError::InvalidArgument(format!(
                "--size 必须 > 0（当前：{}）",
                size
            )));
        }

        let size = u32::try_from(size).map_err(|_| {
            SafeAreaError::ResourceLimit(format!("--size 超出可表示范围：{}", size))
        })?;

        let config = Self {
            size,
            scale,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// 校验尺寸与比例。
    pub fn validate(&self) -> Result<(), SafeAreaError> {
        if self.size == 0 {
            return Err(SafeAreaError::InvalidArgument("--size 必须 > 0".to_string()));
        }

        if let Some(limit) = self.max_canvas_size {
            if self.size > limit {
                return Err(SafeAreaError::ResourceLimit(format!(
                    "画布过大：{}（限制：{}）",
                    self.size, limit
                )));
            }
        }

        if canvas_buffer_len(self.size).is_none() {
            return Err(SafeAreaError::ResourceLimit(format!(
                "画布 {0}x{0} 超出可寻址内存",
                self.size
            )));
        }

        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            return Err(SafeAreaError::InvalidArgument(format!(
                "--scale 必须在 (0, 1] 之间（当前：{}）",
                self.scale
            )));
        }

        Ok(())
    }
}

/// `size × size` RGBA8 画布所需字节数，超出 `usize` 时返回 `None`。
fn canvas_buffer_len(size: u32) -> Option<usize> {
    u64::from(size)
        .checked_mul(u64::from(size))
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok())
}

/// 缩放滤镜档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeQuality {
    Lanczos3,
    CatmullRom,
    Triangle,
    Nearest,
}

impl ResizeQuality {
    /// 从外部字符串解析档位（忽略大小写与首尾空白）。
    pub fn from_str(value: &str) -> Result<Self, SafeAreaError> {
        match value.trim().to_lowercase().as_str() {
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            "catmull-rom" | "catmullrom" => Ok(Self::CatmullRom),
            "triangle" | "bilinear" => Ok(Self::Triangle),
            "nearest" => Ok(Self::Nearest),
            other => Err(SafeAreaError::InvalidArgument(format!(
                "未知缩放滤镜：{}（可选：lanczos3 / catmull-rom / triangle / nearest）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lanczos3 => "lanczos3",
            Self::CatmullRom => "catmull-rom",
            Self::Triangle => "triangle",
            Self::Nearest => "nearest",
        }
    }

    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Triangle => FilterType::Triangle,
            Self::Nearest => FilterType::Nearest,
        }
    }
}

/// 贴图混合方式。
///
/// - `Mask`：以内容自身 alpha 作为蒙版逐通道插值（含 alpha 通道）
/// - `Over`：标准 source-over 合成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    Mask,
    Over,
}

impl CompositeMode {
    pub fn from_str(value: &str) -> Result<Self, SafeAreaError> {
        match value.trim().to_lowercase().as_str() {
            "mask" => Ok(Self::Mask),
            "over" => Ok(Self::Over),
            other => Err(SafeAreaError::InvalidArgument(format!(
                "未知混合方式：{}（可选：mask / over）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Over => "over",
        }
    }
}

/// PNG 压缩档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    Fast,
    Default,
    Best,
}

impl PngCompression {
    pub fn from_str(value: &str) -> Result<Self, SafeAreaError> {
        match value.trim().to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            other => Err(SafeAreaError::InvalidArgument(format!(
                "未知压缩档位：{}（可选：fast / default / best）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Default => "default",
            Self::Best => "best",
        }
    }

    pub(crate) fn compression_type(self) -> CompressionType {
        match self {
            Self::Fast => CompressionType::Fast,
            Self::Default => CompressionType::Default,
            Self::Best => CompressionType::Best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = SafeAreaConfig::default();

        assert_eq!(config.size, 1024);
        assert_eq!(config.scale, 0.88);
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
        assert_eq!(config.composite, CompositeMode::Mask);
        assert_eq!(config.compression, PngCompression::Best);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_raw_rejects_non_positive_size() {
        assert!(matches!(
            SafeAreaConfig::from_raw(0, 0.88),
            Err(SafeAreaError::InvalidArgument(_))
        ));
        assert!(matches!(
            SafeAreaConfig::from_raw(-16, 0.88),
            Err(SafeAreaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_raw_rejects_size_beyond_u32() {
        assert!(matches!(
            SafeAreaConfig::from_raw(i64::from(u32::MAX) + 1, 0.5),
            Err(SafeAreaError::ResourceLimit(_))
        ));
    }

    #[test]
    fn validate_rejects_scale_outside_unit_interval() {
        for scale in [0.0, -0.1, 1.5, 1.000_001, f64::NAN, f64::INFINITY] {
            let config = SafeAreaConfig {
                scale,
                ..SafeAreaConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(SafeAreaError::InvalidArgument(_))),
                "scale {} should be rejected",
                scale
            );
        }
    }

    #[test]
    fn validate_accepts_full_scale_and_tiny_scale() {
        for scale in [1.0, 1e-9] {
            let config = SafeAreaConfig {
                scale,
                ..SafeAreaConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn large_canvas_is_valid_by_default() {
        let config = SafeAreaConfig::from_raw(20_000, 0.88).expect("no canvas limit by default");

        assert_eq!(config.size, 20_000);
        assert_eq!(config.max_canvas_size, None);
        assert_eq!(config.max_source_pixels, None);
        assert_eq!(config.max_file_size, None);
    }

    #[test]
    fn explicit_canvas_limit_rejects_oversized_canvas() {
        let config = SafeAreaConfig {
            size: 20_000,
            max_canvas_size: Some(16_384),
            ..SafeAreaConfig::default()
        };

        assert!(matches!(config.validate(), Err(SafeAreaError::ResourceLimit(_))));
    }

    #[test]
    fn unaddressable_canvas_is_resource_limit() {
        let config = SafeAreaConfig {
            size: u32::MAX,
            ..SafeAreaConfig::default()
        };

        assert!(matches!(config.validate(), Err(SafeAreaError::ResourceLimit(_))));
    }

    #[test]
    fn profile_strings_round_trip_case_insensitively() {
        assert_eq!(ResizeQuality::from_str(" Catmull-Rom ").unwrap(), ResizeQuality::CatmullRom);
        assert_eq!(ResizeQuality::Nearest.as_str(), "nearest");
        assert_eq!(CompositeMode::from_str("OVER").unwrap(), CompositeMode::Over);
        assert_eq!(PngCompression::from_str("fast").unwrap().as_str(), "fast");
        assert!(matches!(
            PngCompression::from_str("zopfli"),
            Err(SafeAreaError::InvalidArgument(_))
        ));
    }
}
