//! UI layer: eframe app shell, panels, and the plain-data view model they render.

pub mod app;
pub mod panels;
pub mod view_model;

pub use app::StudentGuiApp;
