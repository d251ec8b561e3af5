//! buxdu-core - Core library for buxdu-site
//!
//! Platform-independent behaviour of the site's shared header and forms:
//! theme persistence, scroll-reactive header styling, the navigation template,
//! auth-button mapping, panel and preloader state, and form validation.
//! The browser bindings live in `buxdu-web`.

pub mod auth_button;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod notice;
pub mod panel;
pub mod preloader;
pub mod scroll;
pub mod storage;
pub mod theme;

pub use auth_button::AuthAction;
pub use error::SiteError;
pub use navigation::NavigationTemplate;
pub use notice::{Notice, NoticeKind, NoticeTiming};
pub use panel::PanelState;
pub use preloader::{Preloader, PreloaderPhase, ReadyState};
pub use scroll::{HeaderStyle, ScrollPhase, ScrollStyler};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{ThemeState, ThemeStore};
