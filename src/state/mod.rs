pub mod focus;
pub mod nav;
pub mod schedule;
pub mod sections;

pub use focus::{FOCUSABLE_SELECTOR, wrap_target};
pub use nav::{MenuView, NavAction, NavState};
pub use schedule::{Debouncer, FrameGate};
pub use sections::{SectionGeom, current_section, scroll_target};
