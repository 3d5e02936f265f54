//! Page constants and element hooks.
//!
//! Defaults match the workshop page styling. A page may override any field with a
//! `<script type="application/json" id="pageConfig">` block; absent keys keep
//! their defaults.

use serde::Deserialize;
use web_sys::Document;

use crate::error::PageError;
use crate::util::cwarn;

pub const CONFIG_ELEMENT_ID: &str = "pageConfig";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Must equal the rendered nav bar height or targets end up under the bar.
    pub nav_height: f64,
    /// Extra distance below the nav bar where the scrollspy line sits.
    pub spy_offset: f64,
    pub back_to_top_threshold: f64,
    pub scrollspy_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub hash_settle_ms: u32,
    pub observer_bottom_margin_percent: f64,
    pub desktop_breakpoint: f64,
    pub toggle_id: String,
    pub menu_id: String,
    pub nav_link_selector: String,
    pub back_to_top_id: String,
    pub section_selector: String,
    pub active_class: String,
    pub visible_class: String,
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_height: 70.0,
            spy_offset: 20.0,
            back_to_top_threshold: 300.0,
            scrollspy_debounce_ms: 100,
            resize_debounce_ms: 250,
            hash_settle_ms: 100,
            observer_bottom_margin_percent: 60.0,
            desktop_breakpoint: 768.0,
            toggle_id: "navToggle".into(),
            menu_id: "navMenu".into(),
            nav_link_selector: ".nav-link".into(),
            back_to_top_id: "backToTop".into(),
            section_selector: ".section[id]".into(),
            active_class: "active".into(),
            visible_class: "show".into(),
            debug: false,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the inline override block if the page has one. A malformed block is
    /// reported and ignored.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                cwarn(&format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
                Self::default()
            }
        }
    }

    /// Document position compared against section ranges by the polling scrollspy.
    pub fn spy_line(&self, scroll_y: f64) -> f64 {
        scroll_y + self.nav_height + self.spy_offset
    }

    pub fn observer_root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.nav_height, self.observer_bottom_margin_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_styling() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.nav_height, 70.0);
        assert_eq!(cfg.back_to_top_threshold, 300.0);
        assert_eq!(cfg.scrollspy_debounce_ms, 100);
        assert_eq!(cfg.resize_debounce_ms, 250);
        assert_eq!(cfg.hash_settle_ms, 100);
        assert_eq!(cfg.desktop_breakpoint, 768.0);
    }

    #[test]
    fn spy_line_is_nav_height_plus_twenty() {
        assert_eq!(PageConfig::default().spy_line(520.0), 610.0);
    }

    #[test]
    fn root_margin_shrinks_top_and_bottom() {
        assert_eq!(PageConfig::default().observer_root_margin(), "-70px 0px -60% 0px");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = PageConfig::from_json(r#"{"nav_height": 64, "debug": true}"#).unwrap();
        assert_eq!(cfg.nav_height, 64.0);
        assert!(cfg.debug);
        assert_eq!(cfg.menu_id, "navMenu");
        assert_eq!(cfg.observer_root_margin(), "-64px 0px -60% 0px");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(matches!(
            PageConfig::from_json("{nav_height:"),
            Err(PageError::Config(_))
        ));
    }
}
