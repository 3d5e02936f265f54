use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::controller::PageController;
use crate::dom::query_html;
use crate::error::PageError;
use crate::state::{FOCUSABLE_SELECTOR, wrap_target};

/// Keeps Tab / Shift+Tab cycling inside the menu container. Wired whenever the
/// container exists; it does not look at the open/closed state.
pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    let Some(menu) = ctl.els.menu.clone() else {
        return Ok(());
    };
    let ctl_cb = ctl.clone();
    let menu_cb = menu.clone();
    ctl.listen(&menu, "keydown", move |e| {
        let Ok(key) = e.dyn_into::<KeyboardEvent>() else {
            return;
        };
        if key.key() != "Tab" {
            return;
        }
        let focusables = query_html(&menu_cb, FOCUSABLE_SELECTOR);
        let active = ctl_cb.document.active_element();
        let index = active.as_ref().and_then(|a| {
            focusables.iter().position(|el| {
                let el: &Element = el.as_ref();
                el == a
            })
        });
        if let Some(target) = wrap_target(focusables.len(), index, key.shift_key()) {
            let _ = focusables[target].focus();
            key.prevent_default();
        }
    })
}
