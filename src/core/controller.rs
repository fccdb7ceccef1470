//! # 显示变换控制器
//!
//! 持有图片、缩放比例与平移量，把输入事件转成坐标系的平移 + 缩放。
//!
//! ## 实现原理
//!
//! 绘制时不对图片本身重采样，而是变换坐标系：先把原点平移到
//! `容器中心 + 平移量`，再按 `scale` 均匀缩放，最后以原点为中心按原始像素
//! 尺寸绘制图片。这样无论放大多少倍，占用的内存始终是原图大小。
//!
//! 显示矩形（图片在容器中实际占据的区域）是派生量，每次状态变化后由
//! [`ViewState::display_rect`] 重新计算，用于命中测试和像素拾取。

use super::geometry::{PointF, RectF, SizeF, VectorF};
use super::image::PixelImage;
use super::input::{InputEvent, MouseButton};
use super::view_state::{ResetMode, ViewState, ZoomLimits};
use crate::rendering::surface::PaintSurface;

/// 悬停拾取结果：原图像素坐标与灰度值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelProbe {
    pub intensity: u8,
    pub x: u32,
    pub y: u32,
}

pub type ProbeListener = Box<dyn FnMut(PixelProbe)>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    pub limits: ZoomLimits,
    /// 每一格滚轮对应的角度；不足一格的增量被忽略
    pub notch_degrees: f64,
    pub reset_mode: ResetMode,
    /// 关闭后悬停不再拾取像素
    pub pixel_tracking: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            notch_degrees: 15.0,
            reset_mode: ResetMode::Identity,
            pixel_tracking: true,
        }
    }
}

pub struct DisplayController {
    image: Option<PixelImage>,
    state: ViewState,
    container: SizeF,
    display_rect: Option<RectF>,
    dragging: bool,
    /// 拖拽锚点：平移量始终由 `anchor_pan + (pos - anchor_pos)` 得出，
    /// 回到起点时平移量精确复原
    anchor_pos: PointF,
    anchor_pan: VectorF,
    last_drag_pos: PointF,
    redraw_requested: bool,
    listeners: Vec<ProbeListener>,
    options: ControllerOptions,
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}

impl DisplayController {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            image: None,
            state: ViewState::identity(),
            container: SizeF::default(),
            display_rect: None,
            dragging: false,
            anchor_pos: PointF::default(),
            anchor_pan: VectorF::ZERO,
            last_drag_pos: PointF::default(),
            redraw_requested: false,
            listeners: Vec::new(),
            options,
        }
    }

    // ── accessors ────────────────────────────────────────────

    pub fn view_state(&self) -> ViewState {
        self.state
    }

    pub fn display_rect(&self) -> Option<RectF> {
        self.display_rect
    }

    pub fn image(&self) -> Option<&PixelImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn container_size(&self) -> SizeF {
        self.container
    }

    /// 注册像素拾取监听器，每次悬停命中图片时按注册顺序调用
    pub fn subscribe(&mut self, listener: impl FnMut(PixelProbe) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// 取走重绘请求标记
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // ── operations ───────────────────────────────────────────

    /// 替换图片。空图片不改变任何状态，只请求重绘。
    pub fn load_image(&mut self, image: PixelImage, reset_view: bool) {
        self.redraw_requested = true;
        if image.is_empty() {
            log::debug!("忽略空图片");
            return;
        }

        log::debug!(
            "载入图片 {}x{} (reset_view={reset_view})",
            image.width(),
            image.height()
        );
        self.image = Some(image);
        if reset_view {
            self.reset_state();
            self.reanchor_drag();
        }
        self.update_display_rect();
    }

    /// 容器尺寸变化：视图回到初始状态，避免平移量引用已不存在的容器尺寸
    pub fn on_resize(&mut self, size: SizeF) {
        self.container = size;
        if self.image.is_none() {
            return;
        }
        self.reset_state();
        self.reanchor_drag();
        self.update_display_rect();
        self.redraw_requested = true;
    }

    pub fn on_drag_start(&mut self, pos: PointF) {
        self.dragging = true;
        self.last_drag_pos = pos;
        self.reanchor_drag();
    }

    pub fn on_drag_move(&mut self, pos: PointF) {
        if !self.dragging || self.image.is_none() {
            return;
        }
        self.state.pan_offset = self.anchor_pan + (pos - self.anchor_pos);
        self.last_drag_pos = pos;
        self.update_display_rect();
        self.redraw_requested = true;
        log::trace!("平移 -> {:?}", self.state.pan_offset);
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    pub fn on_secondary_release(&mut self) {
        if self.image.is_none() {
            return;
        }
        self.reset_state();
        self.reanchor_drag();
        self.update_display_rect();
        self.redraw_requested = true;
    }

    /// 滚轮缩放，光标落在缩放前的显示矩形内时以光标为中心
    pub fn on_wheel(&mut self, angle_delta: f64, cursor: PointF) {
        if self.image.is_none() || self.options.notch_degrees <= 0.0 {
            return;
        }
        let notches = (angle_delta / self.options.notch_degrees).trunc();
        if notches == 0.0 {
            return;
        }

        let limits = self.options.limits;
        let old_scale = self.state.scale;
        let new_scale = limits.clamp(old_scale + notches * limits.step);

        let inside = self.display_rect.is_some_and(|rect| rect.contains(cursor));
        if inside {
            // 光标到原点的向量按比例伸缩后，原点反向移动差值
            let to_cursor = cursor - self.state.origin(self.container);
            let moved = to_cursor * (new_scale / old_scale) - to_cursor;
            self.state.pan_offset -= moved;
        }
        self.state.scale = new_scale;
        self.reanchor_drag();

        self.update_display_rect();
        self.redraw_requested = true;
        log::trace!("缩放 {old_scale:.2} -> {new_scale:.2} (以光标为中心: {inside})");
    }

    /// 悬停拾取：光标在图片上时换算回原图像素，通知监听器
    pub fn on_hover(&mut self, pos: PointF) -> Option<PixelProbe> {
        if self.dragging || !self.options.pixel_tracking {
            return None;
        }
        let image = self.image.as_ref()?;
        let rect = self.display_rect?;
        if !rect.contains(pos) {
            return None;
        }

        let local = (pos - rect.top_left()) / self.state.scale;
        // 右、下边界落在矩形内，但已超出最后一个像素
        let x = (local.x.floor().max(0.0) as u32).min(image.width() - 1);
        let y = (local.y.floor().max(0.0) as u32).min(image.height() - 1);
        let intensity = image.gray(x, y)?;

        let probe = PixelProbe { intensity, x, y };
        for listener in &mut self.listeners {
            listener(probe);
        }
        Some(probe)
    }

    /// 分发一个输入事件，悬停命中时返回拾取结果
    pub fn handle(&mut self, event: InputEvent) -> Option<PixelProbe> {
        match event {
            InputEvent::Press {
                pos,
                button: MouseButton::Primary,
            } => self.on_drag_start(pos),
            InputEvent::Release {
                button: MouseButton::Primary,
                ..
            } => self.on_drag_end(),
            InputEvent::Release {
                button: MouseButton::Secondary,
                ..
            } => self.on_secondary_release(),
            InputEvent::Press { .. } | InputEvent::Release { .. } => {}
            InputEvent::Move { pos } => {
                if self.dragging {
                    self.on_drag_move(pos);
                } else {
                    return self.on_hover(pos);
                }
            }
            InputEvent::Wheel { angle_delta, pos } => self.on_wheel(angle_delta, pos),
            InputEvent::Resize { size } => self.on_resize(size),
        }
        None
    }

    /// 平移到 `中心 + 平移量`，按 `scale` 缩放，再以原点为中心按原始尺寸绘制
    pub fn render(&self, surface: &mut dyn PaintSurface) {
        let Some(image) = &self.image else {
            surface.draw_placeholder();
            return;
        };

        surface.translate(self.state.origin(self.container).to_vector());
        surface.scale(self.state.scale);

        let native = image.size();
        let target = RectF::new(-native.width / 2.0, -native.height / 2.0, native.width, native.height);
        surface.draw_image(image, target);
    }

    // ── internal ─────────────────────────────────────────────

    fn reset_state(&mut self) {
        let image_size = self.image.as_ref().map(PixelImage::size).unwrap_or_default();
        self.state = ViewState::reset(
            self.options.reset_mode,
            self.container,
            image_size,
            &self.options.limits,
        );
    }

    /// 拖拽途中平移量被其他操作改写时，从当前位置重新起算
    fn reanchor_drag(&mut self) {
        self.anchor_pos = self.last_drag_pos;
        self.anchor_pan = self.state.pan_offset;
    }

    fn update_display_rect(&mut self) {
        self.display_rect = self
            .image
            .as_ref()
            .map(|image| self.state.display_rect(self.container, image.size()));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;
    use crate::rendering::surface::{PaintCall, RecordingSurface};

    const EPS: f64 = 1e-9;

    fn controller_with_image(w: u32, h: u32) -> DisplayController {
        let mut c = DisplayController::default();
        c.on_resize(SizeF::new(400.0, 200.0));
        c.load_image(PixelImage::filled(w, h, [200, 100, 50, 255]), true);
        c
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn identity_view_centers_image() {
        let c = controller_with_image(200, 100);
        assert_eq!(c.view_state(), ViewState::identity());
        assert_eq!(c.display_rect(), Some(RectF::new(100.0, 50.0, 200.0, 100.0)));
    }

    #[test]
    fn one_notch_outside_image_zooms_around_center() {
        let mut c = controller_with_image(200, 100);
        c.on_wheel(15.0, PointF::new(5.0, 5.0));
        let rect = c.display_rect().unwrap();
        assert_close(c.view_state().scale, 1.05);
        assert_close(rect.x, 95.0);
        assert_close(rect.y, 47.5);
        assert_close(rect.width, 210.0);
        assert_close(rect.height, 105.0);
    }

    #[test]
    fn zoom_keeps_pixel_under_cursor() {
        let mut c = controller_with_image(200, 100);
        let cursor = PointF::new(150.0, 70.0);
        let before = c.display_rect().unwrap();
        let src_before = (cursor - before.top_left()) / c.view_state().scale;

        c.on_wheel(15.0, cursor);

        let after = c.display_rect().unwrap();
        let src_after = (cursor - after.top_left()) / c.view_state().scale;
        assert_close(src_before.x, src_after.x);
        assert_close(src_before.y, src_after.y);
        assert_close(after.width, 210.0);
    }

    #[test]
    fn sub_notch_wheel_is_ignored() {
        let mut c = controller_with_image(200, 100);
        c.take_redraw_request();
        c.on_wheel(7.5, PointF::new(200.0, 100.0));
        assert_eq!(c.view_state(), ViewState::identity());
        assert!(!c.take_redraw_request());
    }

    #[test]
    fn multi_notch_and_negative_wheel() {
        let mut c = controller_with_image(200, 100);
        c.on_wheel(45.0, PointF::new(0.0, 0.0));
        assert_close(c.view_state().scale, 1.15);
        c.on_wheel(-15.0, PointF::new(0.0, 0.0));
        assert_close(c.view_state().scale, 1.10);
    }

    #[test]
    fn scale_clamped_at_limits() {
        let mut c = controller_with_image(10, 10);
        for _ in 0..100 {
            c.on_wheel(-15.0, PointF::new(0.0, 0.0));
        }
        assert_close(c.view_state().scale, 0.05);
        for _ in 0..1000 {
            c.on_wheel(15.0, PointF::new(0.0, 0.0));
        }
        assert_close(c.view_state().scale, 20.0);
    }

    #[test]
    fn drag_pans_and_updates_rect() {
        let mut c = controller_with_image(200, 100);
        c.on_drag_start(PointF::new(10.0, 10.0));
        c.on_drag_move(PointF::new(15.0, 20.0));
        c.on_drag_move(PointF::new(25.0, 20.0));
        c.on_drag_end();
        assert_eq!(c.view_state().pan_offset, VectorF::new(15.0, 10.0));
        assert_eq!(c.display_rect(), Some(RectF::new(115.0, 60.0, 200.0, 100.0)));

        // 松开后移动不再平移
        c.on_drag_move(PointF::new(100.0, 100.0));
        assert_eq!(c.view_state().pan_offset, VectorF::new(15.0, 10.0));
    }

    #[test]
    fn fractional_drag_back_restores_pan() {
        let mut c = controller_with_image(200, 100);
        c.on_drag_start(PointF::new(0.0, 0.0));
        c.on_drag_move(PointF::new(0.1, 0.1));
        c.on_drag_end();
        let original = c.view_state().pan_offset;

        c.on_drag_start(PointF::new(0.3, 0.3));
        c.on_drag_move(PointF::new(0.5, 0.5));
        c.on_drag_move(PointF::new(0.3, 0.3));
        c.on_drag_end();
        assert_eq!(c.view_state().pan_offset, original);
    }

    #[test]
    fn wheel_during_drag_keeps_zoom_adjustment() {
        let mut c = controller_with_image(200, 100);
        c.on_drag_start(PointF::new(150.0, 80.0));
        c.on_drag_move(PointF::new(160.0, 80.0));
        c.on_wheel(15.0, PointF::new(160.0, 80.0));
        let after_zoom = c.view_state().pan_offset;

        c.on_drag_move(PointF::new(165.0, 82.0));
        let pan = c.view_state().pan_offset;
        assert_close(pan.x, after_zoom.x + 5.0);
        assert_close(pan.y, after_zoom.y + 2.0);
    }

    #[test]
    fn secondary_release_resets() {
        let mut c = controller_with_image(200, 100);
        c.on_wheel(30.0, PointF::new(150.0, 80.0));
        c.on_drag_start(PointF::new(0.0, 0.0));
        c.on_drag_move(PointF::new(30.0, 40.0));
        c.on_drag_end();

        c.handle(InputEvent::Release {
            pos: PointF::new(1.0, 1.0),
            button: MouseButton::Secondary,
        });
        assert_eq!(c.view_state(), ViewState::identity());
        assert_eq!(c.display_rect(), Some(RectF::new(100.0, 50.0, 200.0, 100.0)));
    }

    #[test]
    fn resize_resets_and_recenters() {
        let mut c = controller_with_image(200, 100);
        c.on_drag_start(PointF::new(0.0, 0.0));
        c.on_drag_move(PointF::new(30.0, 40.0));
        c.on_drag_end();
        c.on_resize(SizeF::new(600.0, 300.0));
        assert_eq!(c.view_state(), ViewState::identity());
        assert_eq!(c.display_rect(), Some(RectF::new(200.0, 100.0, 200.0, 100.0)));
    }

    #[test]
    fn fit_reset_mode_scales_to_container() {
        let mut c = DisplayController::new(ControllerOptions {
            reset_mode: ResetMode::FitToContainer,
            ..Default::default()
        });
        c.on_resize(SizeF::new(400.0, 200.0));
        c.load_image(PixelImage::filled(800, 200, [0; 4]), true);
        assert_eq!(c.view_state().scale, 0.5);
        assert_eq!(c.display_rect(), Some(RectF::new(0.0, 50.0, 400.0, 100.0)));
    }

    #[test]
    fn load_without_reset_keeps_view() {
        let mut c = controller_with_image(200, 100);
        c.on_wheel(15.0, PointF::new(0.0, 0.0));
        c.load_image(PixelImage::filled(100, 100, [0; 4]), false);
        assert_close(c.view_state().scale, 1.05);
        let rect = c.display_rect().unwrap();
        assert_close(rect.width, 105.0);
    }

    #[test]
    fn empty_image_only_requests_redraw() {
        let mut c = controller_with_image(200, 100);
        c.on_wheel(15.0, PointF::new(0.0, 0.0));
        let state = c.view_state();
        c.take_redraw_request();

        c.load_image(PixelImage::empty(), true);
        assert!(c.take_redraw_request());
        assert_eq!(c.view_state(), state);
        assert_eq!(c.image().map(PixelImage::width), Some(200));
    }

    #[test]
    fn no_image_events_are_noops() {
        let mut c = DisplayController::default();
        c.on_resize(SizeF::new(400.0, 200.0));
        let events = [
            InputEvent::Press { pos: PointF::new(10.0, 10.0), button: MouseButton::Primary },
            InputEvent::Move { pos: PointF::new(50.0, 50.0) },
            InputEvent::Release { pos: PointF::new(50.0, 50.0), button: MouseButton::Primary },
            InputEvent::Wheel { angle_delta: 15.0, pos: PointF::new(200.0, 100.0) },
            InputEvent::Release { pos: PointF::new(1.0, 1.0), button: MouseButton::Secondary },
            InputEvent::Move { pos: PointF::new(200.0, 100.0) },
        ];
        for event in events {
            assert_eq!(c.handle(event), None);
        }
        assert_eq!(c.view_state(), ViewState::identity());
        assert_eq!(c.display_rect(), None);
        assert!(!c.take_redraw_request());

        let mut surface = RecordingSurface::default();
        c.render(&mut surface);
        assert_eq!(surface.calls, vec![PaintCall::Placeholder]);
    }

    #[test]
    fn hover_maps_to_source_pixel_and_notifies() {
        let mut c = controller_with_image(200, 100);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.subscribe(move |probe| sink.borrow_mut().push(probe));

        c.on_wheel(15.0 * 20.0, PointF::new(0.0, 0.0)); // scale 2.0
        let rect = c.display_rect().unwrap();
        let probe = c.on_hover(PointF::new(rect.x + 21.0, rect.y + 9.0)).unwrap();
        assert_eq!((probe.x, probe.y), (10, 4));
        assert_eq!(probe.intensity, crate::core::image::gray_of(200, 100, 50));
        assert_eq!(seen.borrow().as_slice(), &[probe]);

        // 右下角边界点落在最后一个像素上
        let edge = c.on_hover(PointF::new(rect.right(), rect.bottom())).unwrap();
        assert_eq!((edge.x, edge.y), (199, 99));

        assert_eq!(c.on_hover(PointF::new(rect.x - 1.0, rect.y)), None);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn hover_skipped_while_dragging_or_disabled() {
        let mut c = controller_with_image(200, 100);
        c.on_drag_start(PointF::new(150.0, 80.0));
        assert_eq!(c.on_hover(PointF::new(150.0, 80.0)), None);
        c.on_drag_end();
        assert!(c.on_hover(PointF::new(150.0, 80.0)).is_some());

        let mut quiet = DisplayController::new(ControllerOptions {
            pixel_tracking: false,
            ..Default::default()
        });
        quiet.on_resize(SizeF::new(400.0, 200.0));
        quiet.load_image(PixelImage::filled(200, 100, [0; 4]), true);
        assert_eq!(quiet.on_hover(PointF::new(150.0, 80.0)), None);
    }

    #[test]
    fn handle_move_routes_to_drag_or_hover() {
        let mut c = controller_with_image(200, 100);
        assert!(c.handle(InputEvent::Move { pos: PointF::new(150.0, 80.0) }).is_some());
        c.handle(InputEvent::Press { pos: PointF::new(150.0, 80.0), button: MouseButton::Primary });
        assert_eq!(c.handle(InputEvent::Move { pos: PointF::new(160.0, 85.0) }), None);
        assert_eq!(c.view_state().pan_offset, VectorF::new(10.0, 5.0));
        c.handle(InputEvent::Release { pos: PointF::new(160.0, 85.0), button: MouseButton::Primary });
        assert!(!c.is_dragging());

        // 中键不触发拖拽
        c.handle(InputEvent::Press { pos: PointF::new(0.0, 0.0), button: MouseButton::Middle });
        assert!(!c.is_dragging());
    }

    #[test]
    fn render_translates_then_scales_native_image() {
        let mut c = controller_with_image(200, 100);
        c.on_drag_start(PointF::new(0.0, 0.0));
        c.on_drag_move(PointF::new(10.0, -20.0));
        c.on_drag_end();
        c.on_wheel(15.0, PointF::new(0.0, 0.0));

        let mut surface = RecordingSurface::default();
        c.render(&mut surface);
        assert_eq!(surface.calls.len(), 3);
        assert_eq!(surface.calls[0], PaintCall::Translate(VectorF::new(210.0, 80.0)));
        match surface.calls[1] {
            PaintCall::Scale(s) => assert_close(s, 1.05),
            ref other => panic!("unexpected call {other:?}"),
        }
        assert_eq!(
            surface.calls[2],
            PaintCall::Image {
                width: 200,
                height: 100,
                target: RectF::new(-100.0, -50.0, 200.0, 100.0),
            }
        );

        // 映射后的屏幕矩形与显示矩形一致
        let mapped = surface.mapped_image_rect().unwrap();
        let rect = c.display_rect().unwrap();
        assert_close(mapped.x, rect.x);
        assert_close(mapped.y, rect.y);
        assert_close(mapped.width, rect.width);
        assert_close(mapped.height, rect.height);
    }

    fn wheel_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
        (-600.0f64..600.0, -50.0f64..450.0, -50.0f64..250.0)
    }

    proptest! {
        #[test]
        fn scale_always_within_limits(events in prop::collection::vec(wheel_strategy(), 1..40)) {
            let mut c = controller_with_image(200, 100);
            for (delta, x, y) in events {
                c.on_wheel(delta, PointF::new(x, y));
                let s = c.view_state().scale;
                prop_assert!((0.05..=20.0).contains(&s));
            }
        }

        #[test]
        fn display_rect_size_tracks_scale(
            events in prop::collection::vec(wheel_strategy(), 0..20),
            dx in -300.0f64..300.0,
            dy in -300.0f64..300.0,
        ) {
            let mut c = controller_with_image(200, 100);
            for (delta, x, y) in events {
                c.on_wheel(delta, PointF::new(x, y));
            }
            c.on_drag_start(PointF::new(0.0, 0.0));
            c.on_drag_move(PointF::new(dx, dy));
            c.on_drag_end();

            let s = c.view_state().scale;
            let rect = c.display_rect().unwrap();
            prop_assert!((rect.width - 200.0 * s).abs() < EPS);
            prop_assert!((rect.height - 100.0 * s).abs() < EPS);
        }

        #[test]
        fn drag_there_and_back_restores_pan(
            first in (-500.0f64..500.0, -500.0f64..500.0),
            start in (-500.0f64..500.0, -500.0f64..500.0),
            path in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..8),
        ) {
            let mut c = controller_with_image(200, 100);
            c.on_drag_start(PointF::new(0.0, 0.0));
            c.on_drag_move(PointF::new(first.0, first.1));
            c.on_drag_end();
            let original = c.view_state().pan_offset;

            let start = PointF::new(start.0, start.1);
            c.on_drag_start(start);
            for (x, y) in path {
                c.on_drag_move(PointF::new(x, y));
            }
            c.on_drag_move(start);
            c.on_drag_end();
            prop_assert_eq!(c.view_state().pan_offset, original);
        }

        #[test]
        fn cursor_anchored_zoom(notches in -10i32..10, fx in 0.0f64..1.0, fy in 0.0f64..1.0) {
            let mut c = controller_with_image(200, 100);
            c.on_wheel(60.0, PointF::new(0.0, 0.0));
            let before = c.display_rect().unwrap();
            let cursor = PointF::new(before.x + fx * before.width, before.y + fy * before.height);
            let src_before = (cursor - before.top_left()) / c.view_state().scale;

            c.on_wheel(notches as f64 * 15.0, cursor);

            let after = c.display_rect().unwrap();
            let src_after = (cursor - after.top_left()) / c.view_state().scale;
            prop_assert!((src_before.x - src_after.x).abs() < 1e-6);
            prop_assert!((src_before.y - src_after.y).abs() < 1e-6);
        }
    }
}
