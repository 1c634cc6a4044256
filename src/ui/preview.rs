//! # Animated Preview
//!
//! Keeps a terminal-like rendition of the composition and animates between
//! states: the old text is deleted one character at a time, then the new
//! segments are typed in one character at a time with their styling.
//!
//! ## Interruption
//!
//! Every animation is tagged with a generation number stored on the shared
//! [`PreviewSurface`]. Starting a new animation bumps the generation. Each
//! task compares its own generation with the surface's under the surface
//! lock before every mutation, and stops as soon as it has been superseded.
//! Only the newest animation ever writes, so old and new text never mix.

use crate::prompt::display::{preview_state_key, PreviewSegment};
use crate::prompt::segment::{SegmentColor, StyleFlags};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default pause between deleted characters.
pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_millis(5);
/// Default pause between typed characters.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(15);

/// A styled stretch of preview text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewRun {
    pub text: String,
    pub color: SegmentColor,
    pub styles: StyleFlags,
}

impl PreviewRun {
    fn plain(text: String) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    fn styled_empty(segment: &PreviewSegment) -> Self {
        Self {
            text: String::new(),
            color: segment.color.clone(),
            styles: segment.styles,
        }
    }
}

/// Shared preview state written by the animation task and read by the
/// renderer.
#[derive(Debug, Default)]
pub struct PreviewSurface {
    runs: Vec<PreviewRun>,
    generation: u64,
    animating: bool,
}

impl PreviewSurface {
    pub fn runs(&self) -> &[PreviewRun] {
        &self.runs
    }

    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub delete_delay: Duration,
    pub type_delay: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            delete_delay: DEFAULT_DELETE_DELAY,
            type_delay: DEFAULT_TYPE_DELAY,
        }
    }
}

pub struct PreviewAnimator {
    surface: Arc<Mutex<PreviewSurface>>,
    last_key: Option<String>,
    timing: AnimationTiming,
}

impl PreviewAnimator {
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            surface: Arc::new(Mutex::new(PreviewSurface::default())),
            last_key: None,
            timing,
        }
    }

    pub fn surface(&self) -> &Arc<Mutex<PreviewSurface>> {
        &self.surface
    }

    /// Start animating towards `segments` unless they look exactly like the
    /// last composition animated. Must be called inside a tokio runtime.
    ///
    /// Returns `true` if a new animation was started.
    pub fn update(&mut self, segments: Vec<PreviewSegment>) -> bool {
        let key = preview_state_key(&segments);
        if self.last_key.as_deref() == Some(key.as_str()) {
            return false;
        }
        self.last_key = Some(key);

        let generation = match self.surface.lock() {
            Ok(mut surface) => {
                surface.generation += 1;
                surface.animating = true;
                surface.generation
            }
            Err(_) => {
                log::warn!("preview surface lock poisoned, skipping animation");
                return false;
            }
        };

        log::debug!(
            "preview: generation {generation} for {} segments",
            segments.len()
        );
        tokio::spawn(animate(
            Arc::clone(&self.surface),
            generation,
            segments,
            self.timing,
        ));
        true
    }

    /// Copy of the current runs, for rendering.
    pub fn snapshot(&self) -> Vec<PreviewRun> {
        self.surface
            .lock()
            .map(|s| s.runs.clone())
            .unwrap_or_default()
    }

    pub fn plain_text(&self) -> String {
        self.surface
            .lock()
            .map(|s| s.plain_text())
            .unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        self.surface.lock().map(|s| s.animating).unwrap_or(false)
    }
}

/// Run `f` on the surface if `generation` is still current. `None` means the
/// caller has been superseded and must stop.
fn with_current<R>(
    surface: &Mutex<PreviewSurface>,
    generation: u64,
    f: impl FnOnce(&mut PreviewSurface) -> R,
) -> Option<R> {
    let mut guard = surface.lock().ok()?;
    if guard.generation != generation {
        return None;
    }
    Some(f(&mut guard))
}

async fn animate(
    surface: Arc<Mutex<PreviewSurface>>,
    generation: u64,
    segments: Vec<PreviewSegment>,
    timing: AnimationTiming,
) {
    // Delete phase: styling is dropped while text shrinks.
    loop {
        let deleted = with_current(&surface, generation, |s| {
            let mut text = s.plain_text();
            if text.pop().is_none() {
                return false;
            }
            s.runs = if text.is_empty() {
                Vec::new()
            } else {
                vec![PreviewRun::plain(text)]
            };
            true
        });
        match deleted {
            None => {
                log::trace!("preview: generation {generation} superseded while deleting");
                return;
            }
            Some(false) => break,
            Some(true) => tokio::time::sleep(timing.delete_delay).await,
        }
    }

    if with_current(&surface, generation, |s| s.runs.clear()).is_none() {
        return;
    }

    // Type phase
    for segment in &segments {
        let opened = with_current(&surface, generation, |s| {
            s.runs.push(PreviewRun::styled_empty(segment));
        });
        if opened.is_none() {
            return;
        }

        for ch in segment.text.chars() {
            let typed = with_current(&surface, generation, |s| {
                if let Some(run) = s.runs.last_mut() {
                    run.text.push(ch);
                }
            });
            if typed.is_none() {
                log::trace!("preview: generation {generation} superseded while typing");
                return;
            }
            tokio::time::sleep(timing.type_delay).await;
        }
    }

    let _ = with_current(&surface, generation, |s| s.animating = false);
    log::debug!("preview: generation {generation} settled");
}
