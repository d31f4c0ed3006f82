// Gateway module for TUI - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod app;
mod input;
mod render;
mod ui;
mod variant;

// Public re-exports - the ONLY way to access TUI functionality
pub use app::App;
pub use ui::run_ui;
pub use variant::{format_count, Palette, Variant, Wording};
