pub mod common;
pub mod state;
pub mod text_label;
pub mod theme_switcher;
