//! # Prompt Module
//!
//! The prompt model: what segments exist, how the user's composition is
//! stored, and how it turns into a `PS1` string and preview text.
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | static segment definitions and color swatches |
//! | [`segment`] | definition / instance types, style flags, colors |
//! | [`selection`] | the ordered, editable composition |
//! | [`generator`] | escape-coded `PS1` serialization |
//! | [`display`] | illustrative preview text per segment |

pub mod catalog;
pub mod display;
pub mod generator;
pub mod segment;
pub mod selection;

pub use catalog::{color_presets, palette_groups, ColorPreset, PaletteGroup};
pub use display::{preview_segments, preview_state_key, PreviewSegment};
pub use generator::{export_line, generate};
pub use segment::{
    Category, InstanceId, SegmentColor, SegmentDefinition, SegmentInstance, StyleAttr, StyleFlags,
};
pub use selection::Selection;
