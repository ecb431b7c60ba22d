pub mod app;
pub mod bridge;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use bridge::{MediaBridge, MediaCommand, WebviewCue, WebviewMedia, WebviewTones, file_url};
pub use context::{AppContext, UiApp, build_app_context};
