//! PS1 Studio - compose, style and preview bash prompts in the terminal
//!
//! This library provides the prompt model (segment catalog, the ordered
//! composition, `PS1` generation) and the TUI that edits it.

pub mod debug;
pub mod prompt;
pub mod ui;
