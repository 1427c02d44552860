pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::{App, Screen};
pub use context::{AppContext, PracticeItem, UiApp, build_app_context};
