use egui::Ui;

use crate::core::controller::PixelProbe;

pub fn show_status_bar(
    ui: &mut Ui,
    message: &str,
    zoom: f64,
    image_size: Option<(u32, u32)>,
    probe: Option<PixelProbe>,
) {
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("状态: {message}"));
        ui.separator();
        ui.label(format!("缩放: {:.0}%", zoom * 100.0));
        if let Some((w, h)) = image_size {
            ui.separator();
            ui.label(format!("尺寸: {w} x {h}"));
        }
        if let Some(p) = probe {
            ui.separator();
            ui.label(format!("像素 ({}, {}) 灰度 {}", p.x, p.y, p.intensity));
        }
    });
}
