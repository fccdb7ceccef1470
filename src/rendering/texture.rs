use egui::{Color32, ColorImage};
use rayon::prelude::*;

use crate::core::image::PixelImage;

/// 将解码后的 RGBA 图片转换为 egui 颜色图像（rayon 并行按行转换）
pub fn to_color_image(image: &PixelImage) -> ColorImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let mut pixels = vec![Color32::TRANSPARENT; w * h];
    if w == 0 || h == 0 {
        return ColorImage {
            size: [w, h],
            pixels,
        };
    }

    let rgba = image.as_rgba();
    pixels
        .par_chunks_mut(w)
        .zip(rgba.par_chunks(w * 4))
        .for_each(|(row_pixels, row_bytes)| {
            for (px, c) in row_pixels.iter_mut().zip(row_bytes.chunks_exact(4)) {
                *px = Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]);
            }
        });

    ColorImage {
        size: [w, h],
        pixels,
    }
}
