use std::cell::Cell;
use std::rc::Rc;

use eframe::egui;
use egui::TextureHandle;

use crate::core::controller::{DisplayController, PixelProbe};
use crate::host::{ImageCrateDecoder, PickOutcome, RfdSelector, pick_and_load};
use crate::rendering::texture::to_color_image;
use crate::storage::viewer_config::ViewerConfig;
use crate::ui::canvas_view::{WheelMapping, show_canvas};
use crate::ui::status_bar::show_status_bar;

pub struct PixViewApp {
    config: ViewerConfig,
    controller: DisplayController,
    texture: Option<TextureHandle>,
    /// 控制器悬停拾取的最新结果
    last_probe: Rc<Cell<Option<PixelProbe>>>,
    last_status: String,
}

impl PixViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(ViewerConfig::load())
    }

    fn with_config(config: ViewerConfig) -> Self {
        let mut controller = DisplayController::new(config.controller_options());
        let last_probe = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_probe);
        controller.subscribe(move |probe| sink.set(Some(probe)));

        Self {
            config,
            controller,
            texture: None,
            last_probe,
            last_status: "未载入图片".to_string(),
        }
    }

    fn open_image(&mut self, ctx: &egui::Context) {
        let request = self.config.dialog_request();
        let outcome = pick_and_load(
            &mut self.controller,
            &mut RfdSelector,
            &ImageCrateDecoder,
            &request,
        );

        match outcome {
            PickOutcome::Cancelled => {}
            PickOutcome::Loaded { path, width, height } => {
                if let Some(image) = self.controller.image() {
                    self.texture = Some(ctx.load_texture(
                        "pixview_image",
                        to_color_image(image),
                        egui::TextureOptions::NEAREST,
                    ));
                }
                self.last_probe.set(None);
                self.last_status = format!("已打开: {} ({width}x{height})", path.display());

                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    self.config.last_directory = Some(dir.to_path_buf());
                    self.config.save();
                }
            }
            PickOutcome::Failed { path, error } => {
                self.last_status = format!("打开失败: {} ({error})", path.display());
            }
        }
    }
}

impl eframe::App for PixViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("📂 打开图片").clicked() {
                    self.open_image(ctx);
                }
                ui.separator();
                ui.label("左键拖拽平移，滚轮以光标为中心缩放，右键复位");
            });
        });

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(28.0)
            .show(ctx, |ui| {
                let image_size = self.controller.image().map(|i| (i.width(), i.height()));
                show_status_bar(
                    ui,
                    &self.last_status,
                    self.controller.view_state().scale,
                    image_size,
                    self.last_probe.get(),
                );
            });

        let wheel = WheelMapping {
            notch_degrees: self.config.notch_degrees,
            points_per_notch: self.config.wheel_points_per_notch,
        };
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                show_canvas(ui, &mut self.controller, self.texture.as_ref(), wheel);
            });
    }
}
