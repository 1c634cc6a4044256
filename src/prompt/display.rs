//! # Preview Text
//!
//! Human-readable stand-ins for each segment, used by the animated preview.
//! These are illustrative only: nothing here talks to git, node or kubectl.

use crate::prompt::segment::{SegmentColor, SegmentInstance, StyleFlags};
use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::OnceLock;

/// Display text for one segment at wall-clock time `now`.
pub fn display_text(segment: &SegmentInstance, now: &DateTime<Local>) -> String {
    let fixed = match segment.id() {
        "user" => "user",
        "host-short" => "host",
        "host-full" => "hostname",
        "path-full" => "~/path/to/dir",
        "path-base" => "dir",
        "char-dollar" => "$",
        "git" => "main",
        "node-v" => "v20.10.0",
        "python-v" => "3.11.5",
        "k8s" => "minikube",
        "bash-version" => "5.2",
        "history-num" => "1024",
        "command-num" => "42",
        "tty" => "ttys001",
        "shell-name" => "bash",
        "jobs" => "1",
        "exit-code" => "0",
        "newline" => "\n",
        "time-24" => return now.format("%H:%M:%S").to_string(),
        "time-12" => return now.format("%I:%M %p").to_string(),
        "date" => return now.format("%a %b %d").to_string(),
        _ => return strip_escapes(segment.code()),
    };
    fixed.to_string()
}

fn escape_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\(.)").ok()).as_ref()
}

/// Drop the backslash from every `\x` pair: `\$` becomes `$`.
pub fn strip_escapes(code: &str) -> String {
    match escape_re() {
        Some(re) => re.replace_all(code, "$1").into_owned(),
        None => code.to_string(),
    }
}

/// One segment as the preview will type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSegment {
    pub text: String,
    pub color: SegmentColor,
    pub styles: StyleFlags,
}

impl PreviewSegment {
    pub fn from_instance(segment: &SegmentInstance, now: &DateTime<Local>) -> Self {
        Self {
            text: display_text(segment, now),
            color: segment.color.clone(),
            styles: segment.styles,
        }
    }
}

pub fn preview_segments(segments: &[SegmentInstance], now: &DateTime<Local>) -> Vec<PreviewSegment> {
    segments
        .iter()
        .map(|s| PreviewSegment::from_instance(s, now))
        .collect()
}

/// Key that changes whenever anything visible in the preview changes.
pub fn preview_state_key(segments: &[PreviewSegment]) -> String {
    segments
        .iter()
        .map(|s| {
            format!(
                "{}{}{}{}{}{}",
                s.text,
                s.color.value(),
                s.styles.bold,
                s.styles.dim,
                s.styles.italic,
                s.styles.underline
            )
        })
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::catalog;
    use crate::prompt::segment::InstanceId;
    use chrono::TimeZone;

    fn instance(id: &str) -> SegmentInstance {
        SegmentInstance::from_definition(catalog::find(id).expect("catalog id"), InstanceId(1))
    }

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 22, 21, 45, 7)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_fixed_examples() {
        let now = fixed_now();
        assert_eq!(display_text(&instance("user"), &now), "user");
        assert_eq!(display_text(&instance("git"), &now), "main");
        assert_eq!(display_text(&instance("newline"), &now), "\n");
    }

    #[test]
    fn test_clock_segments() {
        let now = fixed_now();
        assert_eq!(display_text(&instance("time-24"), &now), "21:45:07");
        assert_eq!(display_text(&instance("time-12"), &now), "09:45 PM");
        assert_eq!(display_text(&instance("date"), &now), "Wed Jan 22");
    }

    #[test]
    fn test_symbols_fall_back_to_code() {
        let now = fixed_now();
        assert_eq!(display_text(&instance("colon"), &now), ":");
        assert_eq!(display_text(&instance("char-arrow"), &now), "❯");
        assert_eq!(strip_escapes("\\[x\\]"), "[x]");
    }

    #[test]
    fn test_state_key_tracks_styles_and_color() {
        let now = fixed_now();
        let mut seg = instance("user");
        let plain = preview_state_key(&preview_segments(std::slice::from_ref(&seg), &now));

        seg.styles.bold = true;
        let bold = preview_state_key(&preview_segments(std::slice::from_ref(&seg), &now));
        assert_ne!(plain, bold);

        seg.color = SegmentColor::custom("#123456").expect("valid hex");
        let colored = preview_state_key(&preview_segments(std::slice::from_ref(&seg), &now));
        assert_ne!(bold, colored);
        assert!(colored.contains("#123456"));
    }
}
