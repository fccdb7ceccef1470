pub mod egui_surface;
pub mod surface;
pub mod texture;
