//! egui 后端：`egui::Painter` 没有变换栈，这里自己累积平移 + 缩放，
//! 在 `draw_image` 时把目标矩形映射到屏幕坐标再交给 painter。

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, TextureId};

use crate::core::geometry::{RectF, VectorF};
use crate::core::image::PixelImage;
use crate::rendering::surface::PaintSurface;

pub struct EguiSurface<'a> {
    painter: &'a Painter,
    /// 容器在屏幕上的位置
    bounds: Rect,
    texture: Option<TextureId>,
    placeholder: &'a str,
    translation: VectorF,
    scale: f64,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, bounds: Rect, texture: Option<TextureId>, placeholder: &'a str) -> Self {
        Self {
            painter,
            bounds,
            texture,
            placeholder,
            translation: VectorF::ZERO,
            scale: 1.0,
        }
    }

    /// 当前坐标系下的矩形 → 屏幕矩形
    pub fn map_rect(&self, target: RectF) -> Rect {
        map_rect(self.bounds.min, self.translation, self.scale, target)
    }
}

fn map_rect(screen_origin: Pos2, translation: VectorF, scale: f64, target: RectF) -> Rect {
    let x = screen_origin.x as f64 + translation.x + target.x * scale;
    let y = screen_origin.y as f64 + translation.y + target.y * scale;
    Rect::from_min_size(
        Pos2::new(x as f32, y as f32),
        egui::vec2((target.width * scale) as f32, (target.height * scale) as f32),
    )
}

impl PaintSurface for EguiSurface<'_> {
    fn translate(&mut self, offset: VectorF) {
        self.translation += offset * self.scale;
    }

    fn scale(&mut self, factor: f64) {
        self.scale *= factor;
    }

    fn draw_image(&mut self, _image: &PixelImage, target: RectF) {
        let rect = self.map_rect(target);
        match self.texture {
            Some(id) => {
                self.painter.image(
                    id,
                    rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            // 纹理还没上传
            None => {
                self.painter.rect_filled(rect, 0.0, Color32::from_gray(60));
            }
        }
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(120)));
    }

    fn draw_placeholder(&mut self) {
        self.painter.text(
            self.bounds.center(),
            Align2::CENTER_CENTER,
            self.placeholder,
            FontId::proportional(16.0),
            Color32::from_gray(150),
        );
    }
}
