// Section geometry and in-page anchor resolution

#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeom {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeom {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section under the spy line. Later sections in document order win on overlap.
pub fn current_section(sections: &[SectionGeom], spy_line: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(spy_line))
        .map(|s| s.id.as_str())
}

/// Id targeted by an in-page href (`#id`). Empty fragments and normal URLs yield `None`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Viewport top to scroll to for `href`, or `None` when it is not an in-page
/// anchor or nothing on the page carries that id.
pub fn scroll_target(
    href: &str,
    element_top: impl FnOnce(&str) -> Option<f64>,
    nav_height: f64,
) -> Option<f64> {
    let id = anchor_id(href)?;
    element_top(id).map(|top| top - nav_height)
}
