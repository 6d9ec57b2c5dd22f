//! Browser glue. Everything here needs a DOM to run.

pub mod canvas;
pub mod menu;
pub mod platform;

pub use canvas::CanvasRenderer;
pub use menu::{is_mobile_user_agent, navigation_target, start_menu, BrowserHaptics};
pub use platform::{BrowserVibration, LocalStorageSettings, ScriptTagLoader};
