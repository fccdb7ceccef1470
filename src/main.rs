mod core;
mod host;
mod rendering;
mod storage;
mod ui;

use ui::app::PixViewApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PixView")
            .with_inner_size([1000.0, 700.0])
            .with_app_id("pixview"),
        ..Default::default()
    };

    eframe::run_native(
        "PixView",
        options,
        Box::new(|cc| Box::new(PixViewApp::new(cc))),
    )
}
