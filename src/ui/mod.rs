//! # UI Module
//!
//! This module provides the terminal user interface of the studio.
//!
//! ## Components
//!
//! - [`App`] - Controller owning the composition, cursors and input modes
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`preview`] - Interruptible type/delete animation of the prompt preview
//! - [`reorder`] - Drag sessions that reorder the composition
//! - [`clipboard`] - OSC 52 copy and the "Copied!" feedback
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├──────────────────┬──────────────────────────────┤
//! │                  │   Your prompt                │
//! │   Segments       │   (ordered, styled entries)  │
//! │   (palette by    ├──────────────────────────────┤
//! │    category)     │   Preview (animated)         │
//! │                  ├──────────────────────────────┤
//! │                  │   Generated PS1 + Copy       │
//! ├──────────────────┴──────────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod preview;
pub mod preview_widget;
pub mod render;
pub mod reorder;
pub mod theme;

pub use app::App;
pub use render::render;
