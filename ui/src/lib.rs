//! # Swatchy UI Library
//!
//! Terminal user interface for the Swatchy theme switcher, built with
//! tui-realm. The heavy lifting (persistence, cross-instance sync, selector
//! state) lives in `swatchy-core`; this crate renders the selector panel,
//! translates key presses into controller calls, and wires the real ports.
//!
//! ## Modules
//!
//! - [`app`] - Application model, update dispatch and view layout
//! - [`cli`] - Command line arguments
//! - [`components`] - UI components and message types
//! - [`config`] - Configuration loading
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`style`] - Color conversion and theme palettes
//!
//! The library interface exists so integration tests can reach the internal
//! modules.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod style;

pub use components::common::Msg;
pub use error::AppError;
