//! One-shot loading overlay lifecycle
//!
//! Two triggers race to hide the overlay: the window `load` event and a
//! fallback timeout. The phase enum makes the loser a no-op.

use std::time::Duration;

pub const PRELOADER_ID: &str = "global-preloader";
pub const PRELOADER_CLASS: &str = "preloader-overlay";
pub const PRELOADER_HIDDEN_CLASS: &str = "preloader-hidden";

/// Hide even if `load` never fires
pub const FALLBACK_TIMEOUT: Duration = Duration::from_millis(5000);

/// Matches the stylesheet's fade-out transition
pub const FADE_OUT: Duration = Duration::from_millis(500);

/// Inner markup of the overlay
pub const PRELOADER_HTML: &str = r#"<div class="preloader-inner">
    <div class="preloader-spinner">
        <span></span><span></span><span></span><span></span>
    </div>
    <p class="preloader-text">Yuklanmoqda...</p>
</div>"#;

/// `document.readyState`, which the DOM exposes as a plain string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values are treated as still loading
    pub fn parse(state: &str) -> Self {
        match state {
            "interactive" => ReadyState::Interactive,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Loading,
        }
    }

    /// DOM is parsed; `DOMContentLoaded` has already fired
    pub fn dom_ready(self) -> bool {
        self != ReadyState::Loading
    }

    /// `load` has already fired, so waiting for it would hang until the fallback
    pub fn loaded(self) -> bool {
        self == ReadyState::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreloaderPhase {
    #[default]
    Showing,
    Hiding,
    Removed,
}

#[derive(Debug, Default)]
pub struct Preloader {
    phase: PreloaderPhase,
}

impl Preloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase
    }

    /// Start fading out
    ///
    /// Returns the delay after which [`Preloader::remove`] should run, or
    /// `None` if a previous call already started the fade.
    pub fn hide(&mut self) -> Option<Duration> {
        match self.phase {
            PreloaderPhase::Showing => {
                self.phase = PreloaderPhase::Hiding;
                Some(FADE_OUT)
            }
            PreloaderPhase::Hiding | PreloaderPhase::Removed => {
                tracing::debug!("preloader already {:?}, ignoring hide", self.phase);
                None
            }
        }
    }

    /// Finish the fade; true if the overlay should be detached now
    pub fn remove(&mut self) -> bool {
        if self.phase == PreloaderPhase::Hiding {
            self.phase = PreloaderPhase::Removed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_state_from_dom_strings() {
        let loading = ReadyState::parse("loading");
        assert!(!loading.dom_ready());
        assert!(!loading.loaded());

        let interactive = ReadyState::parse("interactive");
        assert!(interactive.dom_ready());
        assert!(!interactive.loaded());

        let complete = ReadyState::parse("complete");
        assert!(complete.dom_ready());
        assert!(complete.loaded());

        assert_eq!(ReadyState::parse(""), ReadyState::Loading);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut preloader = Preloader::new();
        assert_eq!(preloader.phase(), PreloaderPhase::Showing);

        assert_eq!(preloader.hide(), Some(FADE_OUT));
        assert_eq!(preloader.phase(), PreloaderPhase::Hiding);

        assert!(preloader.remove());
        assert_eq!(preloader.phase(), PreloaderPhase::Removed);
    }

    #[test]
    fn test_double_hide_schedules_once() {
        let mut preloader = Preloader::new();
        // load event and fallback timeout both fire
        assert!(preloader.hide().is_some());
        assert!(preloader.hide().is_none());

        assert!(preloader.remove());
        assert!(preloader.hide().is_none());
        assert!(!preloader.remove());
    }

    #[test]
    fn test_remove_before_hide_is_ignored() {
        let mut preloader = Preloader::new();
        assert!(!preloader.remove());
        assert_eq!(preloader.phase(), PreloaderPhase::Showing);
    }
}
