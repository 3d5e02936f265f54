//! DOM lookups and class/attribute writes used by the controller.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::state::{MenuView, SectionGeom};

/// Elements the page exposes to the behaviors, captured once at startup.
pub struct PageElements {
    pub toggle: Option<HtmlElement>,
    pub menu: Option<HtmlElement>,
    pub links: Vec<HtmlElement>,
    pub back_to_top: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
}

impl PageElements {
    pub fn collect(document: &Document, cfg: &PageConfig) -> Result<Self, PageError> {
        let by_id = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        };
        Ok(Self {
            toggle: by_id(&cfg.toggle_id),
            menu: by_id(&cfg.menu_id),
            links: html_elements(document.query_selector_all(&cfg.nav_link_selector)?),
            back_to_top: by_id(&cfg.back_to_top_id),
            sections: html_elements(document.query_selector_all(&cfg.section_selector)?),
        })
    }

    pub fn section_geometry(&self) -> Vec<SectionGeom> {
        self.sections
            .iter()
            .map(|s| SectionGeom::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect()
    }
}

pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Focusable descendants of `root` in document order.
pub fn query_html(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn apply_menu(toggle: &HtmlElement, menu: &HtmlElement, view: MenuView, class: &str) {
    let _ = toggle.set_attribute("aria-expanded", view.aria_expanded);
    set_class(menu, class, view.class_present);
}

/// Clears the active class from every link, then marks the one whose href is `active_href`.
pub fn apply_active(links: &[HtmlElement], active_href: Option<&str>, class: &str) {
    for link in links {
        let matches = active_href.is_some_and(|want| link.get_attribute("href").as_deref() == Some(want));
        set_class(link, class, matches);
    }
}
