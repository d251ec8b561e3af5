//! Transient, auto-dismissing form notices
//!
//! A notice is shown, stays visible for `visible`, shrinks for `fade`, then
//! hides. Each `show` bumps a generation counter and timers carry the
//! generation they were scheduled for, so a timer left over from an older
//! notice never hides a newer one.

use std::time::Duration;

/// Shrink animation before the notice disappears
pub const FADE: Duration = Duration::from_millis(300);

pub const LOGIN_SUCCESS: NoticeTiming = NoticeTiming::new(3000);
pub const LOGIN_ERROR: NoticeTiming = NoticeTiming::new(4000);
pub const REGISTER_SUCCESS: NoticeTiming = NoticeTiming::new(3000);
pub const REGISTER_ERROR: NoticeTiming = NoticeTiming::new(5000);

/// Notice type (determines styling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "❌",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTiming {
    pub visible: Duration,
    pub fade: Duration,
}

impl NoticeTiming {
    pub const fn new(visible_ms: u64) -> Self {
        Self {
            visible: Duration::from_millis(visible_ms),
            fade: FADE,
        }
    }

    /// Time from `show` until the notice is gone
    pub fn total(&self) -> Duration {
        self.visible + self.fade
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticePhase {
    #[default]
    Hidden,
    Shown,
    Fading,
}

impl NoticePhase {
    /// Utility classes applied to the notice element
    pub fn classes(&self) -> &'static str {
        match self {
            NoticePhase::Hidden => "hidden scale-95",
            NoticePhase::Shown => "scale-100",
            NoticePhase::Fading => "scale-95",
        }
    }
}

/// Generation stamp handed out by [`Notice::show`]
pub type NoticeTicket = u64;

/// One notice slot (a form has one for success and one for errors)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notice {
    phase: NoticePhase,
    message: Option<String>,
    generation: NoticeTicket,
}

impl Notice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> NoticePhase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.phase != NoticePhase::Hidden
    }

    /// Show (or re-show) the notice and return the ticket its timers must carry
    pub fn show(&mut self, message: Option<String>) -> NoticeTicket {
        self.generation += 1;
        self.phase = NoticePhase::Shown;
        self.message = message;
        self.generation
    }

    /// Visible period elapsed; true if this ticket is still current
    pub fn begin_fade(&mut self, ticket: NoticeTicket) -> bool {
        if ticket == self.generation && self.phase == NoticePhase::Shown {
            self.phase = NoticePhase::Fading;
            true
        } else {
            false
        }
    }

    /// Fade elapsed; true if the notice was hidden by this call
    pub fn finish(&mut self, ticket: NoticeTicket) -> bool {
        if ticket == self.generation && self.phase == NoticePhase::Fading {
            self.phase = NoticePhase::Hidden;
            true
        } else {
            false
        }
    }
}
