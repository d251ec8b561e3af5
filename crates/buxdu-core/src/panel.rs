//! Open/closed state for the mobile menu and the user dropdown

/// Presentation class toggled on an open panel
pub const ACTIVE_CLASS: &str = "active";

pub const OPEN_MENU_ID: &str = "open-menu";
pub const CLOSE_MENU_ID: &str = "close-menu";
pub const MOBILE_MENU_ID: &str = "mobile-navlinks";

pub const USER_MENU_TRIGGER_ID: &str = "user-menu-trigger";
pub const USER_MENU_PANEL_ID: &str = "user-dropdown-menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    /// Opening twice stays open
    pub fn open(&mut self) -> PanelState {
        *self = PanelState::Open;
        *self
    }

    /// Closing twice stays closed
    pub fn close(&mut self) -> PanelState {
        *self = PanelState::Closed;
        *self
    }

    pub fn toggle(&mut self) -> PanelState {
        *self = match self {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        };
        *self
    }

    /// Document-level click: close unless it landed on the trigger or panel
    pub fn dismiss_on_click(&mut self, inside: bool) -> PanelState {
        if !inside {
            self.close();
        }
        *self
    }

    /// Read the state back from the panel's class list
    pub fn from_active_class(has_active: bool) -> Self {
        if has_active {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }
}
