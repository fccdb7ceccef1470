//! # 绘制表面
//!
//! 控制器通过 [`PaintSurface`] 描述绘制：平移、缩放坐标系后按原始尺寸画图。
//! 实际后端见 `rendering::egui_surface`；测试里用 `RecordingSurface` 记录调用。

use crate::core::geometry::{RectF, VectorF};
use crate::core::image::PixelImage;

pub trait PaintSurface {
    /// 平移当前坐标系原点
    fn translate(&mut self, offset: VectorF);
    /// 以当前原点为中心均匀缩放坐标系
    fn scale(&mut self, factor: f64);
    /// 在当前坐标系下把图片画到 `target`
    fn draw_image(&mut self, image: &PixelImage, target: RectF);
    /// 没有图片时的兜底绘制
    fn draw_placeholder(&mut self);
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCall {
    Translate(VectorF),
    Scale(f64),
    Image { width: u32, height: u32, target: RectF },
    Placeholder,
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<PaintCall>,
}

#[cfg(test)]
impl RecordingSurface {
    /// 按记录的变换把最后一次绘制的图片矩形映射回容器坐标
    pub fn mapped_image_rect(&self) -> Option<RectF> {
        let mut offset = VectorF::ZERO;
        let mut scale = 1.0;
        let mut mapped = None;
        for call in &self.calls {
            match *call {
                PaintCall::Translate(v) => offset += v * scale,
                PaintCall::Scale(s) => scale *= s,
                PaintCall::Image { target, .. } => {
                    mapped = Some(RectF::new(
                        offset.x + target.x * scale,
                        offset.y + target.y * scale,
                        target.width * scale,
                        target.height * scale,
                    ));
                }
                PaintCall::Placeholder => {}
            }
        }
        mapped
    }
}

#[cfg(test)]
impl PaintSurface for RecordingSurface {
    fn translate(&mut self, offset: VectorF) {
        self.calls.push(PaintCall::Translate(offset));
    }

    fn scale(&mut self, factor: f64) {
        self.calls.push(PaintCall::Scale(factor));
    }

    fn draw_image(&mut self, image: &PixelImage, target: RectF) {
        self.calls.push(PaintCall::Image {
            width: image.width(),
            height: image.height(),
            target,
        });
    }

    fn draw_placeholder(&mut self) {
        self.calls.push(PaintCall::Placeholder);
    }
}
