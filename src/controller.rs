//! Page Interaction Controller.
//!
//! Owns the shared `NavState`, the page elements, and every listener closure. The
//! behaviors in `crate::behaviors` only read the page and dispatch actions here;
//! `render` is the single place the shared state reaches the DOM.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};
use yew::Reducible;

use crate::behaviors;
use crate::config::PageConfig;
use crate::dom::{self, PageElements};
use crate::error::PageError;
use crate::state::{NavAction, NavState, SectionGeom};
use crate::util::{cdebug, clog, set_debug};

thread_local! {
    // keeps the controller (and every listener closure it owns) alive for the page
    static CONTROLLER: RefCell<Option<Rc<PageController>>> = const { RefCell::new(None) };
}

pub struct PageController {
    pub window: Window,
    pub document: Document,
    pub cfg: PageConfig,
    pub els: PageElements,
    state: RefCell<Rc<NavState>>,
    listeners: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
    // js-side handles that must outlive this call (observer + its callback)
    retained: RefCell<Vec<Box<dyn std::any::Any>>>,
}

impl PageController {
    fn new(window: Window, document: Document, cfg: PageConfig, els: PageElements) -> Self {
        // the visibility class decides; render(None) then rewrites aria-expanded to match
        let menu_open = els
            .menu
            .as_ref()
            .is_some_and(|m| m.class_list().contains(&cfg.active_class));
        let state = NavState::new(menu_open, cfg.back_to_top_threshold, cfg.desktop_breakpoint);
        Self {
            window,
            document,
            cfg,
            els,
            state: RefCell::new(Rc::new(state)),
            listeners: RefCell::new(Vec::new()),
            retained: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> Rc<NavState> {
        self.state.borrow().clone()
    }

    /// Applies `action` to the shared state and renders whatever changed.
    pub fn dispatch(&self, action: NavAction) {
        let prev = self.state();
        cdebug(&format!("dispatch {action:?}"));
        let next = prev.clone().reduce(action);
        if Rc::ptr_eq(&prev, &next) {
            return;
        }
        *self.state.borrow_mut() = next.clone();
        self.render(Some(&prev), &next);
    }

    fn render(&self, prev: Option<&NavState>, next: &NavState) {
        let changes = next.changes_since(prev);
        if let Some(view) = changes.menu {
            if let (Some(toggle), Some(menu)) = (&self.els.toggle, &self.els.menu) {
                dom::apply_menu(toggle, menu, view, &self.cfg.active_class);
            }
        }
        if let Some(active_href) = changes.active_href {
            dom::apply_active(&self.els.links, active_href.as_deref(), &self.cfg.active_class);
        }
        if let Some(visible) = changes.back_to_top_visible {
            if let Some(btn) = &self.els.back_to_top {
                dom::set_class(btn, &self.cfg.visible_class, visible);
            }
        }
    }

    pub fn listen(
        &self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), PageError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push(callback);
        Ok(())
    }

    pub fn retain(&self, handle: impl std::any::Any) {
        self.retained.borrow_mut().push(Box::new(handle));
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn inner_width(&self) -> Option<f64> {
        self.window.inner_width().ok().and_then(|v| v.as_f64())
    }

    pub fn section_geometry(&self) -> Vec<SectionGeom> {
        self.els.section_geometry()
    }

    /// Document-relative top of the element with `id`, if it exists.
    pub fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_top() as f64)
    }

    pub fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Builds the controller against the current document and wires every behavior.
pub fn start() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let cfg = PageConfig::load(&document);
    set_debug(cfg.debug);
    let els = PageElements::collect(&document, &cfg)?;

    let ctl = Rc::new(PageController::new(window, document, cfg, els));
    let initial = ctl.state();
    ctl.render(None, &initial);

    behaviors::menu::wire(&ctl)?;
    behaviors::smooth_scroll::wire(&ctl)?;
    behaviors::scroll::wire(&ctl)?;
    behaviors::scrollspy::update_from_scroll(&ctl);
    behaviors::back_to_top::wire(&ctl)?;
    behaviors::scrollspy::wire_observer(&ctl)?;
    behaviors::hash_nav::wire(&ctl)?;
    behaviors::resize::wire(&ctl)?;
    behaviors::focus_trap::wire(&ctl)?;

    clog("Workshop page interactions initialized");
    clog(&format!(
        "Found {} sections and {} nav links",
        ctl.els.sections.len(),
        ctl.els.links.len()
    ));

    CONTROLLER.with(|c| *c.borrow_mut() = Some(ctl));
    Ok(())
}
