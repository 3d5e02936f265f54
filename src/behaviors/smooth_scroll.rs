use std::rc::Rc;

use crate::controller::PageController;
use crate::error::PageError;
use crate::state::scroll_target;

/// In-page nav links scroll smoothly to their section, leaving room for the fixed nav bar.
/// Links to missing ids and normal URLs keep the browser's default navigation.
pub fn wire(ctl: &Rc<PageController>) -> Result<(), PageError> {
    for link in &ctl.els.links {
        let ctl_cb = ctl.clone();
        let link_cb = link.clone();
        ctl.listen(link, "click", move |e| {
            let Some(href) = link_cb.get_attribute("href") else {
                return;
            };
            if let Some(top) = scroll_target(&href, |id| ctl_cb.element_top(id), ctl_cb.cfg.nav_height) {
                e.prevent_default();
                ctl_cb.smooth_scroll_to(top);
            }
        })?;
    }
    Ok(())
}
