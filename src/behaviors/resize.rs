use std::rc::Rc;

use crate::controller::PageController;
use crate::error::PageError;
use crate::state::{Debouncer, NavAction};

/// Closes the mobile menu once the viewport settles above the desktop breakpoint.
pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    if ctl.els.toggle.is_none() || ctl.els.menu.is_none() {
        return Ok(());
    }
    let debounce = Rc::new(Debouncer::new(ctl.cfg.resize_debounce_ms));
    let ctl_cb = ctl.clone();
    ctl.listen(&ctl.window, "resize", move |_| {
        let ctl_tick = ctl_cb.clone();
        debounce.schedule(move || {
            if let Some(width) = ctl_tick.inner_width() {
                ctl_tick.dispatch(NavAction::Resized { width });
            }
        });
    })
}
