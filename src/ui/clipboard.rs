//! # Clipboard Export
//!
//! Copies text to the system clipboard with an OSC 52 escape sequence, which
//! works over SSH and inside tmux without a platform clipboard library.
//! A short-lived "Copied!" state drives the copy button feedback.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use std::time::{Duration, Instant};

/// How long the copy button shows its confirmation.
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(2000);

pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Write `text` to the clipboard through `out` (normally the terminal).
pub fn copy_to<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())
        .context("Failed to write clipboard sequence")?;
    out.flush().context("Failed to flush clipboard sequence")?;
    Ok(())
}

/// Transient confirmation state for the copy button.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    shown_until: Option<Instant>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            shown_until: None,
            duration,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.shown_until = Some(now + self.duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.shown_until.is_some_and(|until| now < until)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_active(now) {
            "Copied!"
        } else {
            "Copy"
        }
    }
}
