//! # Segment Types
//!
//! A [`SegmentDefinition`] is the shared, catalog-level description of one
//! kind of prompt piece. A [`SegmentInstance`] is one placed occurrence of a
//! definition inside the composition, carrying its own style flags and color.

use std::fmt;

/// Palette category a definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Classics,
    Symbols,
    Integrations,
}

impl Category {
    /// Display order of categories in the palette.
    pub const ORDER: [Category; 3] = [
        Category::Classics,
        Category::Symbols,
        Category::Integrations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Classics => "Classics",
            Category::Symbols => "Symbols",
            Category::Integrations => "Integrations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDefinition {
    pub id: &'static str,
    pub label: &'static str,
    /// Raw prompt code this segment contributes to the generated string.
    pub code: &'static str,
    /// Representative value shown next to the label in the palette.
    pub example: &'static str,
    pub category: Category,
    /// Marks a `$(...)` command substitution. Informational only.
    pub is_command: bool,
}

/// Identity of a placed segment, stable across reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the four independent text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttr {
    Bold,
    Dim,
    Italic,
    Underline,
}

impl StyleAttr {
    pub const ALL: [StyleAttr; 4] = [
        StyleAttr::Bold,
        StyleAttr::Dim,
        StyleAttr::Italic,
        StyleAttr::Underline,
    ];

    /// SGR parameter emitted for this attribute.
    pub fn sgr_code(self) -> &'static str {
        match self {
            StyleAttr::Bold => "1",
            StyleAttr::Dim => "2",
            StyleAttr::Italic => "3",
            StyleAttr::Underline => "4",
        }
    }

    /// Single-letter toggle label used in the selection list.
    pub fn letter(self) -> char {
        match self {
            StyleAttr::Bold => 'B',
            StyleAttr::Dim => 'D',
            StyleAttr::Italic => 'I',
            StyleAttr::Underline => 'U',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleFlags {
    pub fn get(&self, attr: StyleAttr) -> bool {
        match attr {
            StyleAttr::Bold => self.bold,
            StyleAttr::Dim => self.dim,
            StyleAttr::Italic => self.italic,
            StyleAttr::Underline => self.underline,
        }
    }

    pub fn set(&mut self, attr: StyleAttr, value: bool) {
        match attr {
            StyleAttr::Bold => self.bold = value,
            StyleAttr::Dim => self.dim = value,
            StyleAttr::Italic => self.italic = value,
            StyleAttr::Underline => self.underline = value,
        }
    }

    /// Active SGR codes, always in bold, dim, italic, underline order.
    pub fn codes(&self) -> Vec<&'static str> {
        StyleAttr::ALL
            .iter()
            .filter(|attr| self.get(**attr))
            .map(|attr| attr.sgr_code())
            .collect()
    }
}

/// Sentinel color code for a user-picked hex color.
pub const CUSTOM_COLOR_CODE: &str = "custom";

/// Color of a placed segment. Code and display value live in one variant so
/// they can only ever change together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SegmentColor {
    #[default]
    Default,
    Preset {
        code: &'static str,
        hex: &'static str,
    },
    Custom {
        hex: String,
    },
}

impl SegmentColor {
    /// Build a custom color from `#rrggbb` input. Returns `None` for anything
    /// else.
    pub fn custom(hex: &str) -> Option<Self> {
        parse_hex(hex).map(|_| SegmentColor::Custom {
            hex: hex.trim().to_ascii_lowercase(),
        })
    }

    /// Color code: empty, an ANSI code, or [`CUSTOM_COLOR_CODE`].
    pub fn code(&self) -> &str {
        match self {
            SegmentColor::Default => "",
            SegmentColor::Preset { code, .. } => code,
            SegmentColor::Custom { .. } => CUSTOM_COLOR_CODE,
        }
    }

    /// Display value: empty or a `#rrggbb` hex string.
    pub fn value(&self) -> &str {
        match self {
            SegmentColor::Default => "",
            SegmentColor::Preset { hex, .. } => hex,
            SegmentColor::Custom { hex } => hex,
        }
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex(self.value())
    }
}

/// Parse `#rrggbb` (leading `#` required, case-insensitive).
pub fn parse_hex(input: &str) -> Option<(u8, u8, u8)> {
    let digits = input.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A placed, independently styled occurrence of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentInstance {
    pub instance_id: InstanceId,
    pub definition: SegmentDefinition,
    pub color: SegmentColor,
    pub styles: StyleFlags,
}

impl SegmentInstance {
    /// Copy the definition's fields into a fresh instance with no styling.
    pub fn from_definition(definition: &SegmentDefinition, instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            definition: *definition,
            color: SegmentColor::Default,
            styles: StyleFlags::default(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.definition.id
    }

    pub fn code(&self) -> &'static str {
        self.definition.code
    }

    pub fn label(&self) -> &'static str {
        self.definition.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: SegmentDefinition = SegmentDefinition {
        id: "at-symbol",
        label: "@",
        code: "@",
        example: "@",
        category: Category::Symbols,
        is_command: false,
    };

    #[test]
    fn test_style_codes_fixed_order() {
        let mut flags = StyleFlags::default();
        flags.set(StyleAttr::Underline, true);
        flags.set(StyleAttr::Bold, true);
        flags.set(StyleAttr::Italic, true);
        assert_eq!(flags.codes(), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_style_codes_empty() {
        assert!(StyleFlags::default().codes().is_empty());
    }

    #[test]
    fn test_from_definition_starts_unstyled() {
        let instance = SegmentInstance::from_definition(&AT, InstanceId(7));
        assert_eq!(instance.instance_id, InstanceId(7));
        assert_eq!(instance.code(), "@");
        assert_eq!(instance.color, SegmentColor::Default);
        assert_eq!(instance.styles, StyleFlags::default());
    }

    #[test]
    fn test_color_code_and_value() {
        let preset = SegmentColor::Preset {
            code: "32",
            hex: "#22c55e",
        };
        assert_eq!(preset.code(), "32");
        assert_eq!(preset.value(), "#22c55e");
        assert_eq!(preset.rgb(), Some((0x22, 0xc5, 0x5e)));

        let custom = SegmentColor::custom("#FF8800").expect("valid hex");
        assert_eq!(custom.code(), CUSTOM_COLOR_CODE);
        assert_eq!(custom.value(), "#ff8800");

        assert_eq!(SegmentColor::Default.code(), "");
        assert_eq!(SegmentColor::Default.value(), "");
    }

    #[test]
    fn test_custom_rejects_bad_hex() {
        assert!(SegmentColor::custom("ff8800").is_none());
        assert!(SegmentColor::custom("#ff88").is_none());
        assert!(SegmentColor::custom("#gg8800").is_none());
        assert!(SegmentColor::custom("").is_none());
    }
}
