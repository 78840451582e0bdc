//! # 几何计算模块
//!
//! 负责画布内内容尺寸与居中偏移量的纯计算，不触碰像素。
//!
//! - `target = round(size * scale)`，采用“四舍六入五成双”（half-to-even），并夹在 `[1, size]`
//! - `offset = (size - target) / 2`，向下取整；余数为奇数时多出的一像素留在右/下边

use serde::Serialize;

use super::SafeAreaError;

/// 一次留白处理的版式结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafeAreaLayout {
    /// 画布边长。
    pub canvas_size: u32,
    /// 缩放后内容边长。
    pub target: u32,
    /// 内容左上角在画布上的坐标（x 与 y 相同）。
    pub offset: u32,
}

impl SafeAreaLayout {
    /// 按画布尺寸与缩放比例计算版式。
    ///
    /// # 示例
    /// ```rust
    /// use icon_safearea::safe_area::SafeAreaLayout;
    ///
    /// let layout = SafeAreaLayout::compute(1024, 0.5)?;
    /// assert_eq!((layout.target, layout.offset), (512, 256));
    /// # Ok::<(), icon_safearea::safe_area::SafeAreaError>(())
    /// ```
    pub fn compute(size: u32, scale: f64) -> Result<Self, SafeAreaError> {
        if size == 0 {
            return Err(SafeAreaError::InvalidArgument("--size 必须 > 0".to_string()));
        }
        if !scale.is_finite() || scale <= 0.0 || scale > 1.0 {
            return Err(SafeAreaError::InvalidArgument(format!(
                "--scale 必须在 (0, 1] 之间（当前：{}）",
                scale
            )));
        }

        let target = content_side(size, scale);
        Ok(Self {
            canvas_size: size,
            target,
            offset: (size - target) / 2,
        })
    }

    /// 右/下方向的留白宽度，余数为奇数时比 `offset` 多 1。
    pub fn trailing_padding(&self) -> u32 {
        self.canvas_size - self.target - self.offset
    }
}

/// `round_half_even(size * scale)`，结果至少为 1、至多为 `size`。
fn content_side(size: u32, scale: f64) -> u32 {
    let rounded = (f64::from(size) * scale).round_ties_even();
    // scale ∈ (0, 1]，rounded 不会超过 size，这里的夹取只处理 0
    (rounded as u32).clamp(1, size)
}
