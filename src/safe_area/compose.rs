//! # 画布合成模块
//!
//! 负责创建透明画布并把缩放后的内容贴到指定偏移处。
//!
//! `Mask` 模式即“带蒙版粘贴”：以内容 alpha 为蒙版，对四个通道（含 alpha）
//! 逐一做 `dst * (255 - a) + src * a` 的插值。画布全透明时，不透明像素原样落到画布上。

use image::{Rgba, RgbaImage};

use super::{CompositeMode, SafeAreaHandler};

impl SafeAreaHandler {
    /// 创建 `size × size` 的全透明画布。
    pub(super) fn new_canvas(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
    }

    /// 把 `content` 贴到 `canvas` 的 `(offset, offset)` 处，超出画布的部分被裁掉。
    pub(super) fn paste(
        canvas: &mut RgbaImage,
        content: &RgbaImage,
        offset: u32,
        mode: CompositeMode,
    ) {
        match mode {
            CompositeMode::Mask => Self::paste_with_alpha_mask(canvas, content, offset),
            CompositeMode::Over => {
                image::imageops::overlay(canvas, content, i64::from(offset), i64::from(offset))
            }
        }
    }

    fn paste_with_alpha_mask(canvas: &mut RgbaImage, content: &RgbaImage, offset: u32) {
        let width = content.width().min(canvas.width().saturating_sub(offset));
        let height = content.height().min(canvas.height().saturating_sub(offset));

        for y in 0..height {
            for x in 0..width {
                let src = content.get_pixel(x, y);
                let mask = src[3];
                let dst = canvas.get_pixel_mut(x + offset, y + offset);

                for channel in 0..4 {
                    dst[channel] = blend_channel(dst[channel], src[channel], mask);
                }
            }
        }
    }
}

/// `(dst * (255 - mask) + src * mask) / 255`，四舍五入。
fn blend_channel(dst: u8, src: u8, mask: u8) -> u8 {
    let mask = u32::from(mask);
    let tmp = u32::from(dst) * (255 - mask) + u32::from(src) * mask + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_channel_endpoints_are_exact() {
        for value in [0_u8, 1, 127, 128, 254, 255] {
            assert_eq!(blend_channel(0, value, 255), value);
            assert_eq!(blend_channel(value, 200, 0), value);
        }
    }

    #[test]
    fn blend_channel_midpoint() {
        assert_eq!(blend_channel(0, 255, 128), 128);
        assert_eq!(blend_channel(255, 0, 128), 127);
    }

    #[test]
    fn canvas_is_fully_transparent() {
        let canvas = SafeAreaHandler::new_canvas(8);

        assert_eq!(canvas.dimensions(), (8, 8));
        assert!(canvas.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn mask_paste_copies_opaque_pixels_and_leaves_border_transparent() {
        let mut canvas = SafeAreaHandler::new_canvas(6);
        let content = RgbaImage::from_pixel(3, 3, Rgba([200, 10, 20, 255]));

        SafeAreaHandler::paste(&mut canvas, &content, 1, CompositeMode::Mask);

        for (x, y, pixel) in canvas.enumerate_pixels() {
            let inside = (1..4).contains(&x) && (1..4).contains(&y);
            if inside {
                assert_eq!(*pixel, Rgba([200, 10, 20, 255]));
            } else {
                assert_eq!(*pixel, Rgba([0, 0, 0, 0]), "pixel ({x},{y}) should stay transparent");
            }
        }
    }

    #[test]
    fn mask_paste_scales_translucent_pixels_by_their_alpha() {
        let mut canvas = SafeAreaHandler::new_canvas(1);
        let content = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));

        SafeAreaHandler::paste(&mut canvas, &content, 0, CompositeMode::Mask);

        // 透明画布上：颜色与 alpha 都乘以 128/255
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([128, 128, 128, 64]));
    }

    #[test]
    fn over_paste_keeps_translucent_pixel_on_transparent_canvas() {
        let mut canvas = SafeAreaHandler::new_canvas(1);
        let content = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));

        SafeAreaHandler::paste(&mut canvas, &content, 0, CompositeMode::Over);

        let pixel = canvas.get_pixel(0, 0);
        assert!((127..=128).contains(&pixel[3]));
        assert!(pixel[0] >= 254);
    }

    #[test]
    fn paste_clips_content_larger_than_canvas() {
        let mut canvas = SafeAreaHandler::new_canvas(4);
        let content = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));

        SafeAreaHandler::paste(&mut canvas, &content, 2, CompositeMode::Mask);

        assert_eq!(*canvas.get_pixel(3, 3), Rgba([1, 2, 3, 255]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }
}
