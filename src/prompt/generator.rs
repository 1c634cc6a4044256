//! # PS1 String Generator
//!
//! Serializes a composition into the escape-coded string bash expects in
//! `PS1`. Non-printing sequences are wrapped in `\[` / `\]` so bash can
//! compute the visible prompt width.
//!
//! Custom hex colors are not converted to a 24-bit SGR sequence; they emit
//! the literal placeholder [`CUSTOM_COLOR_PLACEHOLDER`].

use crate::prompt::segment::{SegmentInstance, CUSTOM_COLOR_CODE};

pub const ESCAPE_START: &str = "\\[\\e[";
pub const ESCAPE_END: &str = "m\\]";
pub const ESCAPE_RESET: &str = "\\[\\e[0m\\]";
pub const CUSTOM_COLOR_PLACEHOLDER: &str = "38;2;...";

/// Build the escape-coded prompt string.
pub fn generate(segments: &[SegmentInstance]) -> String {
    let mut out = String::new();
    for segment in segments {
        push_segment(&mut out, segment);
    }
    out
}

fn push_segment(out: &mut String, segment: &SegmentInstance) {
    let styles = segment.styles.codes();
    let color_code = segment.color.code();

    if !color_code.is_empty() {
        let code = if color_code == CUSTOM_COLOR_CODE {
            CUSTOM_COLOR_PLACEHOLDER
        } else {
            color_code
        };
        out.push_str(ESCAPE_START);
        for style in &styles {
            out.push_str(style);
            out.push(';');
        }
        out.push_str(code);
        out.push_str(ESCAPE_END);
        out.push_str(segment.code());
        out.push_str(ESCAPE_RESET);
    } else if !styles.is_empty() {
        out.push_str(ESCAPE_START);
        out.push_str(&styles.join(";"));
        out.push_str(ESCAPE_END);
        out.push_str(segment.code());
        out.push_str(ESCAPE_RESET);
    } else {
        out.push_str(segment.code());
    }
}

/// The assignment line shown in the readout and copied to the clipboard.
pub fn export_line(ps1: &str) -> String {
    format!("PS1=\"{ps1}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::catalog;
    use crate::prompt::segment::{InstanceId, SegmentColor, StyleAttr};

    fn instance(id: &str) -> SegmentInstance {
        let def = catalog::find(id).expect("catalog id");
        SegmentInstance::from_definition(def, InstanceId(1))
    }

    #[test]
    fn test_plain_segment_is_verbatim() {
        assert_eq!(generate(&[instance("git")]), instance("git").code());
    }

    #[test]
    fn test_all_styles_without_color() {
        let mut seg = instance("user");
        for attr in StyleAttr::ALL {
            seg.styles.set(attr, true);
        }
        assert_eq!(generate(&[seg]), "\\[\\e[1;2;3;4m\\]\\u\\[\\e[0m\\]");
    }

    #[test]
    fn test_color_without_styles() {
        let mut seg = instance("path-full");
        seg.color = SegmentColor::Preset {
            code: "34",
            hex: "#3b82f6",
        };
        assert_eq!(generate(&[seg]), "\\[\\e[34m\\]\\w\\[\\e[0m\\]");
    }

    #[test]
    fn test_custom_color_uses_placeholder() {
        let mut seg = instance("user");
        seg.styles.dim = true;
        seg.color = SegmentColor::custom("#ff8800").expect("valid hex");
        assert_eq!(generate(&[seg]), "\\[\\e[2;38;2;...m\\]\\u\\[\\e[0m\\]");
    }

    #[test]
    fn test_export_line() {
        assert_eq!(export_line("\\u@\\h"), "PS1=\"\\u@\\h\"");
    }
}
