//! Scroll-reactive header styling
//!
//! The header's look is a pure function of two inputs: whether the page is
//! scrolled past [`SCROLL_THRESHOLD_PX`] and the current theme.

use crate::theme::ThemeState;

/// Offset (px) beyond which the header switches to its compact form
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether the page is scrolled past the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollPhase {
    Top,
    Scrolled,
}

impl ScrollPhase {
    /// Strictly greater than the threshold counts as scrolled
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD_PX {
            ScrollPhase::Scrolled
        } else {
            ScrollPhase::Top
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollPhase::Scrolled
    }
}

/// Inline style values for `.header-top-bar` and `.header-main-nav`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub top_bar_transform: &'static str,
    pub top_bar_opacity: &'static str,
    pub nav_top: &'static str,
    pub nav_background: &'static str,
    pub nav_box_shadow: &'static str,
    pub nav_backdrop_filter: &'static str,
}

impl HeaderStyle {
    pub fn compute(offset: f64, theme: ThemeState) -> Self {
        Self::for_phase(ScrollPhase::from_offset(offset), theme)
    }

    pub fn for_phase(phase: ScrollPhase, theme: ThemeState) -> Self {
        let (nav_background, nav_box_shadow) = match (phase, theme) {
            (ScrollPhase::Top, ThemeState::Dark) => ("rgb(30, 41, 59)", "none"),
            (ScrollPhase::Top, ThemeState::Light) => {
                ("rgba(255, 255, 255, 0.95)", "0 2px 10px rgba(0, 0, 0, 0.08)")
            }
            (ScrollPhase::Scrolled, ThemeState::Dark) => {
                ("rgba(15, 23, 42, 0.95)", "0 4px 20px rgba(0, 0, 0, 0.3)")
            }
            (ScrollPhase::Scrolled, ThemeState::Light) => {
                ("rgba(255, 255, 255, 0.98)", "0 4px 20px rgba(0, 0, 0, 0.15)")
            }
        };

        match phase {
            ScrollPhase::Top => Self {
                top_bar_transform: "translateY(0)",
                top_bar_opacity: "1",
                nav_top: "40px",
                nav_background,
                nav_box_shadow,
                nav_backdrop_filter: "blur(24px)",
            },
            ScrollPhase::Scrolled => Self {
                top_bar_transform: "translateY(-100%)",
                top_bar_opacity: "0",
                nav_top: "0",
                nav_background,
                nav_box_shadow,
                nav_backdrop_filter: "blur(10px)",
            },
        }
    }

    /// `(property, value)` pairs for the top bar
    pub fn top_bar_properties(&self) -> [(&'static str, &'static str); 2] {
        [
            ("transform", self.top_bar_transform),
            ("opacity", self.top_bar_opacity),
        ]
    }

    /// `(property, value)` pairs for the main nav
    pub fn nav_properties(&self) -> [(&'static str, &'static str); 4] {
        [
            ("top", self.nav_top),
            ("background", self.nav_background),
            ("box-shadow", self.nav_box_shadow),
            ("backdrop-filter", self.nav_backdrop_filter),
        ]
    }
}

/// Coalesces scroll events into style changes
///
/// Scroll events fire far more often than the `(phase, theme)` pair changes,
/// so `update` only yields a style when there is something new to apply.
#[derive(Debug, Default)]
pub struct ScrollStyler {
    last: Option<(ScrollPhase, ThemeState)>,
}

impl ScrollStyler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, offset: f64, theme: ThemeState) -> Option<HeaderStyle> {
        let key = (ScrollPhase::from_offset(offset), theme);
        if self.last == Some(key) {
            return None;
        }
        self.last = Some(key);
        Some(HeaderStyle::for_phase(key.0, key.1))
    }

    /// Force the next `update` to emit (header nodes were replaced)
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn last_applied(&self) -> Option<(ScrollPhase, ThemeState)> {
        self.last
    }
}
