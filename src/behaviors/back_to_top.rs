use std::rc::Rc;

use crate::controller::PageController;
use crate::error::PageError;
use crate::state::NavAction;

pub fn update(ctl: &PageController) {
    if ctl.els.back_to_top.is_some() {
        ctl.dispatch(NavAction::Scrolled { scroll_y: ctl.scroll_y() });
    }
}

pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    let Some(btn) = ctl.els.back_to_top.clone() else {
        return Ok(());
    };
    let ctl_cb = ctl.clone();
    ctl.listen(&btn, "click", move |_| ctl_cb.smooth_scroll_to(0.0))?;
    update(ctl);
    Ok(())
}
