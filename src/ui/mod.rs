pub mod app;
pub mod canvas_view;
pub mod status_bar;
