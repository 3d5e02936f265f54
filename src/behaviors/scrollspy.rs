//! Active nav link detection.
//!
//! Two producers feed the same `active_section` cell: a polling pass run on the
//! coalesced scroll tick, and an `IntersectionObserver` when the browser has one.
//! Whichever dispatches last decides the highlighted link.

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::controller::PageController;
use crate::error::PageError;
use crate::state::{NavAction, current_section};
use crate::util::cdebug;

pub fn update_from_scroll(ctl: &PageController) {
    let line = ctl.cfg.spy_line(ctl.scroll_y());
    let sections = ctl.section_geometry();
    let current = current_section(&sections, line).map(str::to_owned);
    ctl.dispatch(NavAction::SetActiveSection(current));
}

fn has_intersection_observer(ctl: &PageController) -> bool {
    js_sys::Reflect::has(ctl.window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

pub fn wire_observer(ctl: &Rc<PageController>) -> Result<(), PageError> {
    if !has_intersection_observer(ctl) {
        cdebug("IntersectionObserver unavailable; scrollspy uses scroll polling only");
        return Ok(());
    }

    let ctl_cb = ctl.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let id = entry.target().id();
            if !id.is_empty() {
                ctl_cb.dispatch(NavAction::SectionIntersected(id));
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&ctl.cfg.observer_root_margin());
    init.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for section in &ctl.els.sections {
        observer.observe(section);
    }
    ctl.retain((observer, callback));
    Ok(())
}
