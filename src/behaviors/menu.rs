use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::controller::PageController;
use crate::error::PageError;
use crate::state::NavAction;
use crate::util::cdebug;

/// Toggle button, close-on-link-select, and close-on-outside-click.
pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    let (Some(toggle), Some(menu)) = (ctl.els.toggle.clone(), ctl.els.menu.clone()) else {
        cdebug("nav toggle or menu missing; mobile menu disabled");
        return Ok(());
    };

    {
        let ctl_cb = ctl.clone();
        ctl.listen(&toggle, "click", move |_| ctl_cb.dispatch(NavAction::ToggleMenu))?;
    }

    for link in &ctl.els.links {
        let ctl_cb = ctl.clone();
        ctl.listen(link, "click", move |_| ctl_cb.dispatch(NavAction::CloseMenu))?;
    }

    let ctl_cb = ctl.clone();
    ctl.listen(&ctl.document, "click", move |e| {
        if !ctl_cb.state().menu_open {
            return;
        }
        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = target
            .as_ref()
            .is_some_and(|n| toggle.contains(Some(n)) || menu.contains(Some(n)));
        if !inside {
            ctl_cb.dispatch(NavAction::CloseMenu);
        }
    })
}
