use egui::{
    Color32, Event, MouseWheelUnit, Painter, PointerButton, Pos2, Rect, Sense, TextureHandle, Ui,
};

use crate::core::controller::DisplayController;
use crate::core::geometry::{PointF, SizeF};
use crate::core::input::{InputEvent, MouseButton};
use crate::rendering::egui_surface::EguiSurface;

/// 一页滚动折算成几格
const NOTCHES_PER_PAGE: f64 = 3.0;

/// egui 滚轮增量 → 角度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMapping {
    pub notch_degrees: f64,
    pub points_per_notch: f64,
}

impl WheelMapping {
    pub fn angle(&self, unit: MouseWheelUnit, delta_y: f32) -> f64 {
        let notches = match unit {
            MouseWheelUnit::Line => delta_y as f64,
            MouseWheelUnit::Point => delta_y as f64 / self.points_per_notch,
            MouseWheelUnit::Page => delta_y as f64 * NOTCHES_PER_PAGE,
        };
        notches * self.notch_degrees
    }
}

pub fn show_canvas(
    ui: &mut Ui,
    controller: &mut DisplayController,
    texture: Option<&TextureHandle>,
    wheel: WheelMapping,
) {
    let available = ui.available_size();
    let (rect, _response) = ui.allocate_exact_size(available, Sense::click_and_drag());

    let painter = ui.painter_at(rect);
    paint_checkerboard(&painter, rect);

    // ── container resize ─────────────────────────────────────
    let size = SizeF::new(rect.width() as f64, rect.height() as f64);
    if size != controller.container_size() {
        controller.handle(InputEvent::Resize { size });
    }

    // ── pointer / wheel events ───────────────────────────────
    let (raw_events, hover) = ui
        .ctx()
        .input(|i| (i.events.clone(), i.pointer.hover_pos()));
    let events = translate_events(&raw_events, rect, hover, controller.is_dragging(), wheel);
    for event in events {
        controller.handle(event);
    }

    // ── image ────────────────────────────────────────────────
    let mut surface = EguiSurface::new(
        &painter,
        rect,
        texture.map(TextureHandle::id),
        "点击「打开图片」选择一张图片",
    );
    controller.render(&mut surface);

    if controller.take_redraw_request() {
        ui.ctx().request_repaint();
    }
}

/// 透明区域的棋盘格底纹
fn paint_checkerboard(painter: &Painter, rect: Rect) {
    const TILE: f32 = 48.0;
    let shades = [Color32::from_gray(28), Color32::from_gray(35)];

    let mut y = rect.top();
    let mut row = 0usize;
    while y < rect.bottom() {
        let mut x = rect.left();
        let mut col = 0usize;
        while x < rect.right() {
            let cell = Rect::from_min_max(
                Pos2::new(x, y),
                Pos2::new((x + TILE).min(rect.right()), (y + TILE).min(rect.bottom())),
            );
            painter.rect_filled(cell, 0.0, shades[(row + col) % 2]);
            x += TILE;
            col += 1;
        }
        y += TILE;
        row += 1;
    }
}

fn local(rect: Rect, p: Pos2) -> PointF {
    PointF::new((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64)
}

/// 把一帧内的 egui 原始事件转换为容器局部坐标的输入事件。
///
/// 按下只接受容器内的；拖拽中移动和左键释放不论位置都转发，
/// 与普通控件抓取鼠标的行为一致。拖拽中指针离开窗口视为左键释放。
fn translate_events(
    raw: &[Event],
    rect: Rect,
    hover: Option<Pos2>,
    mut dragging: bool,
    wheel: WheelMapping,
) -> Vec<InputEvent> {
    let mut pointer = hover;
    let mut out = Vec::new();

    for event in raw {
        match event {
            Event::PointerMoved(pos) => {
                pointer = Some(*pos);
                if dragging || rect.contains(*pos) {
                    out.push(InputEvent::Move { pos: local(rect, *pos) });
                }
            }
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                pointer = Some(*pos);
                let button = match button {
                    PointerButton::Primary => MouseButton::Primary,
                    PointerButton::Secondary => MouseButton::Secondary,
                    PointerButton::Middle => MouseButton::Middle,
                    _ => continue,
                };
                let inside = rect.contains(*pos);
                let pos = local(rect, *pos);
                match (*pressed, button) {
                    (true, _) if inside => {
                        if button == MouseButton::Primary {
                            dragging = true;
                        }
                        out.push(InputEvent::Press { pos, button });
                    }
                    (false, MouseButton::Primary) if dragging => {
                        dragging = false;
                        out.push(InputEvent::Release { pos, button });
                    }
                    (false, _) if inside => out.push(InputEvent::Release { pos, button }),
                    _ => {}
                }
            }
            Event::PointerGone => {
                if dragging {
                    dragging = false;
                    let pos = pointer.map(|p| local(rect, p)).unwrap_or_default();
                    out.push(InputEvent::Release {
                        pos,
                        button: MouseButton::Primary,
                    });
                }
                pointer = None;
            }
            Event::MouseWheel { unit, delta, .. } => {
                let Some(pos) = pointer.filter(|p| rect.contains(*p)) else {
                    continue;
                };
                let angle_delta = wheel.angle(*unit, delta.y);
                if angle_delta != 0.0 {
                    out.push(InputEvent::Wheel {
                        angle_delta,
                        pos: local(rect, pos),
                    });
                }
            }
            _ => {}
        }
    }
    out
}
