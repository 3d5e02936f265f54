//! One module per page behavior. Each `wire` is a no-op when the elements it
//! needs are missing from the page.

pub mod back_to_top;
pub mod focus_trap;
pub mod hash_nav;
pub mod menu;
pub mod resize;
pub mod scroll;
pub mod scrollspy;
pub mod smooth_scroll;
