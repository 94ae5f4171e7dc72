//! # Swatchy Core Library
//!
//! Theme selection logic for the Swatchy switcher: the controller that keeps
//! the persisted selection, the styling hook and the selector panel in
//! agreement, plus the ports it talks through.
//!
//! The library is presentation-agnostic. Storage and styling are injected
//! behind the [`ports::SelectionStore`] and [`ports::StyleHook`] traits, so
//! embedders (and tests) can run the full state machine without a terminal
//! or a real state file.
//!
//! ## Modules
//!
//! - [`theme`] - Theme identifiers and the builtin theme registry
//! - [`controller`] - The theme controller and its operations
//! - [`ports`] - Storage and styling ports plus in-memory fakes
//! - [`store`] - File-backed selection store (TOML, per-user config dir)
//! - [`bus`] - Same-process pub-sub for theme change notifications
//! - [`selector`] - Selector button registry and visual states
//! - [`watch`] - Cross-instance change detection via file watching
//! - [`error`] - Error types

pub mod bus;
pub mod controller;
pub mod error;
pub mod ports;
pub mod selector;
pub mod store;
pub mod theme;
pub mod watch;

pub use bus::{EventBus, ThemeEvent};
pub use controller::ThemeController;
pub use error::{CoreError, CoreResult};
pub use ports::{SelectionStore, StyleHook};
pub use store::FileSelectionStore;
pub use theme::{Theme, ThemeId};
