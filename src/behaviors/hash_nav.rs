use std::rc::Rc;
use std::time::Duration;
use yew::platform::spawn_local;
use yew::platform::time::sleep;

use crate::controller::PageController;
use crate::error::PageError;
use crate::state::scroll_target;

/// Scrolls to the element named by the URL fragment, if there is one.
pub fn scroll_to_fragment(ctl: &PageController) {
    let hash = ctl.window.location().hash().unwrap_or_default();
    if let Some(top) = scroll_target(&hash, |id| ctl.element_top(id), ctl.cfg.nav_height) {
        ctl.smooth_scroll_to(top);
    }
}

fn scroll_after_settle(ctl: Rc<PageController>) {
    let settle = Duration::from_millis(u64::from(ctl.cfg.hash_settle_ms));
    spawn_local(async move {
        // let layout finish before reading offsets
        sleep(settle).await;
        scroll_to_fragment(&ctl);
    });
}

pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    let ctl_cb = ctl.clone();
    ctl.listen(&ctl.window, "hashchange", move |_| scroll_to_fragment(&ctl_cb))?;

    // The module may start after `load` has already fired.
    if ctl.document.ready_state() == "complete" {
        scroll_after_settle(ctl.clone());
        return Ok(());
    }
    let ctl_cb = ctl.clone();
    ctl.listen(&ctl.window, "load", move |_| scroll_after_settle(ctl_cb.clone()))
}
