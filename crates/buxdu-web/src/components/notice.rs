//! Transient form notices (success and error banners)

use buxdu_core::notice::{Notice, NoticeKind, NoticeTiming};
use leptos::prelude::*;

/// Show a notice and schedule its fade-out and removal
///
/// Timers carry the ticket of the notice they belong to, so re-showing the
/// banner before the old timers fire keeps the new message up for its full
/// duration.
pub fn show_notice(notice: RwSignal<Notice>, message: Option<String>, timing: NoticeTiming) {
    let Some(ticket) = notice.try_update(|n| n.show(message)) else {
        return;
    };

    set_timeout(
        move || {
            let fading = notice.try_update(|n| n.begin_fade(ticket)).unwrap_or(false);
            if fading {
                set_timeout(
                    move || {
                        notice.update(|n| {
                            n.finish(ticket);
                        });
                    },
                    timing.fade,
                );
            }
        },
        timing.visible,
    );
}

/// Banner bound to one notice slot
#[component]
pub fn NoticeBanner(
    notice: RwSignal<Notice>,
    kind: NoticeKind,
    /// Text shown when the notice carries no message of its own
    #[prop(into)]
    fallback: String,
) -> impl IntoView {
    let class = move || {
        format!(
            "notice {} {}",
            kind.class(),
            notice.with(|n| n.phase().classes())
        )
    };
    let message = move || {
        notice
            .with(|n| n.message().map(str::to_string))
            .unwrap_or_else(|| fallback.clone())
    };
    let role = match kind {
        NoticeKind::Error => "alert",
        NoticeKind::Success => "status",
    };

    view! {
        <div class=class role=role>
            <span class="notice-icon">{kind.icon()}</span>
            <span class="notice-message">{message}</span>
        </div>
    }
}
