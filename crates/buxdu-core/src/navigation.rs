//! Header navigation structure and markup
//!
//! The navigation is data ([`NavigationTemplate`], loaded from TOML) rendered
//! through the askama template in `templates/header.html`.

use crate::auth_button::AuthAction;
use crate::error::{Result, SiteError};
use crate::theme::ThemeState;
use askama::Template;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default element id the header is injected into
pub const HEADER_CONTAINER_ID: &str = "header-container";

pub const TOP_BAR_SELECTOR: &str = ".header-top-bar";
pub const MAIN_NAV_SELECTOR: &str = ".header-main-nav";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_SUN_ID: &str = "theme-icon-sun";
pub const THEME_ICON_MOON_ID: &str = "theme-icon-moon";

const THEME_TOGGLE_TITLE: &str = "Rangni o'zgartirish";

/// Ids of the controls bound after each mount, looked up inside the container
pub const HEADER_CONTROL_IDS: [&str; 8] = [
    THEME_TOGGLE_ID,
    THEME_ICON_SUN_ID,
    THEME_ICON_MOON_ID,
    crate::panel::OPEN_MENU_ID,
    crate::panel::CLOSE_MENU_ID,
    crate::panel::MOBILE_MENU_ID,
    crate::auth_button::AUTH_BUTTON_IDS[0],
    crate::auth_button::AUTH_BUTTON_IDS[1],
];

/// CSS selector for an element id
pub fn id_selector(id: &str) -> String {
    format!("#{}", id)
}

/// Built-in navigation config
pub const EMBEDDED_NAVIGATION: &str = include_str!("../assets/navigation.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Dropdown in the desktop nav bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub label: String,
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    /// Dialable number used in the `tel:` link
    pub phone: String,
    pub phone_label: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub home: String,
    pub logo: String,
    #[serde(default = "default_logo_alt")]
    pub logo_alt: String,
}

fn default_logo_alt() -> String {
    "logo".to_string()
}

/// Everything the header shows apart from the auth control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTemplate {
    pub contact: ContactInfo,
    pub brand: Brand,
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub groups: Vec<NavGroup>,
    #[serde(default)]
    pub mobile_links: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "header.html")]
struct HeaderMarkup<'a> {
    nav: &'a NavigationTemplate,
    auth: AuthAction,
    toggle_title: &'a str,
    sun_display: &'a str,
    moon_display: &'a str,
}

impl NavigationTemplate {
    /// Navigation compiled into the crate
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_NAVIGATION)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let template: Self =
            toml::from_str(content).map_err(|source| SiteError::ConfigParse { source })?;
        template.validate()?;
        Ok(template)
    }

    /// Load an alternative navigation file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded navigation config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Reject links that would render as dead markup
    pub fn validate(&self) -> Result<()> {
        let all_links = self
            .links
            .iter()
            .chain(self.mobile_links.iter())
            .chain(self.groups.iter().flat_map(|g| g.items.iter()));

        for link in all_links {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(SiteError::InvalidConfig {
                    message: format!("link with empty label or href: {:?}", link),
                });
            }
        }

        if let Some(group) = self.groups.iter().find(|g| g.items.is_empty()) {
            return Err(SiteError::InvalidConfig {
                message: format!("dropdown '{}' has no items", group.label),
            });
        }

        Ok(())
    }

    /// Total number of links across the desktop bar, dropdowns and mobile panel
    pub fn link_count(&self) -> usize {
        self.links.len()
            + self.mobile_links.len()
            + self.groups.iter().map(|g| g.items.len()).sum::<usize>()
    }

    /// Markup with the template-default auth control and dark-theme icons
    pub fn render_html(&self) -> Result<String> {
        self.render_for(AuthAction::DEFAULT, ThemeState::default())
    }

    pub fn render_for(&self, auth: AuthAction, theme: ThemeState) -> Result<String> {
        let (sun_display, moon_display) = theme.icons().display();
        HeaderMarkup {
            nav: self,
            auth,
            toggle_title: THEME_TOGGLE_TITLE,
            sun_display,
            moon_display,
        }
        .render()
        .map_err(|source| SiteError::Render { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_button::{REGISTER_LABEL, SIGN_IN_LABEL};

    fn minimal_toml() -> &'static str {
        r#"
            [contact]
            email = "info@example.uz"
            phone = "+998000000000"
            phone_label = "(00)000-00-00"
            address = "Main st. 1"

            [brand]
            home = "index.html"
            logo = "logo.svg"

            [[links]]
            label = "Home"
            href = "index.html"

            [[groups]]
            label = "More"
            items = [{ label = "About <us>", href = "about.html" }]
        "#
    }

    #[test]
    fn test_embedded_navigation_parses() {
        let nav = NavigationTemplate::embedded().unwrap();
        assert_eq!(nav.links.len(), 2);
        assert_eq!(nav.groups.len(), 5);
        assert_eq!(nav.groups[2].items.len(), 7);
        assert_eq!(nav.mobile_links.len(), 18);
        assert_eq!(nav.contact.email, "u.m.xalikova@buxdu.uz");
    }

    #[test]
    fn test_default_render_contains_dom_contract() {
        let html = NavigationTemplate::embedded().unwrap().render_html().unwrap();
        for needle in [
            "class=\"header-top-bar\"",
            "class=\"header-main-nav\"",
            "id=\"theme-toggle\"",
            "id=\"theme-icon-sun\"",
            "id=\"theme-icon-moon\"",
            "id=\"auth-button\"",
            "id=\"mobile-auth-button\"",
            "id=\"open-menu\"",
            "id=\"close-menu\"",
            "id=\"mobile-navlinks\"",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
        assert!(html.contains(SIGN_IN_LABEL));
        assert!(html.contains("href=\"login.html\" id=\"auth-button\""));
    }

    #[test]
    fn test_each_control_rendered_once_per_header() {
        let html = NavigationTemplate::embedded().unwrap().render_html().unwrap();
        for id in HEADER_CONTROL_IDS {
            let attr = format!("id=\"{id}\"");
            assert_eq!(html.matches(&attr).count(), 1, "{id} should appear once");
        }
    }

    #[test]
    fn test_id_selector() {
        assert_eq!(id_selector(THEME_TOGGLE_ID), "#theme-toggle");
    }

    #[test]
    fn test_render_for_applies_auth_and_theme() {
        let nav = NavigationTemplate::embedded().unwrap();
        let auth = crate::auth_button::resolve("login.html");
        let html = nav.render_for(auth, ThemeState::Light).unwrap();

        assert!(html.contains("href=\"register.html\" id=\"auth-button\""));
        // askama escapes the apostrophe in the label
        assert!(!html.contains(REGISTER_LABEL));
        assert!(html.contains("Ro&#x27;yxatdan o&#x27;tish"));
        assert!(html.contains("id=\"theme-icon-moon\" xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" style=\"display: block;\""));
    }

    #[test]
    fn test_labels_are_html_escaped() {
        let nav = NavigationTemplate::from_toml_str(minimal_toml()).unwrap();
        let html = nav.render_html().unwrap();
        assert!(html.contains("About &lt;us&gt;"));
        assert!(!html.contains("About <us>"));
    }

    #[test]
    fn test_missing_optional_sections_default_to_empty() {
        let nav = NavigationTemplate::from_toml_str(minimal_toml()).unwrap();
        assert!(nav.mobile_links.is_empty());
        assert_eq!(nav.brand.logo_alt, "logo");
        assert_eq!(nav.link_count(), 2);
    }

    #[test]
    fn test_empty_group_rejected() {
        let toml = minimal_toml().replace(
            r#"items = [{ label = "About <us>", href = "about.html" }]"#,
            "items = []",
        );
        let err = NavigationTemplate::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = NavigationTemplate::from_toml_str("[contact").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
    }
}
