//! # 已解码位图
//!
//! `PixelImage` 是控制器唯一持有的图像数据：固定宽高的 RGBA8 像素。
//! 解码由外部的 `image` crate 负责，这里只做尺寸与像素访问。

use super::geometry::SizeF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    /// 行优先 RGBA，长度 = width * height * 4
    rgba: Vec<u8>,
}

impl PixelImage {
    /// 由原始 RGBA 数据构造；长度与尺寸不匹配时返回 `None`。
    #[cfg(test)]
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return None;
        }
        Some(Self { width, height, rgba })
    }

    /// 用单一颜色填充的图像（测试用）
    #[cfg(test)]
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let total = width as usize * height as usize;
        let mut rgba = Vec::with_capacity(total * 4);
        for _ in 0..total {
            rgba.extend_from_slice(&color);
        }
        Self { width, height, rgba }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> SizeF {
        SizeF::new(self.width as f64, self.height as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.rgba.is_empty()
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }

    /// 像素灰度值：`(r*11 + g*16 + b*5) / 32`，忽略 alpha
    pub fn gray(&self, x: u32, y: u32) -> Option<u8> {
        let [r, g, b, _] = self.pixel(x, y)?;
        Some(gray_of(r, g, b))
    }
}

/// 整数加权灰度，与常见工具包的 gray 公式一致
pub fn gray_of(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 11 + g as u32 * 16 + b as u32 * 5) / 32) as u8
}

impl From<image::RgbaImage> for PixelImage {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba: img.into_raw(),
        }
    }
}
