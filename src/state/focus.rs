// Focus trap wrap rules for the mobile menu

pub const FOCUSABLE_SELECTOR: &str =
    r#"a[href], button, textarea, input, select, details, [tabindex]:not([tabindex="-1"])"#;

/// Index to move focus to when Tab is pressed inside the trap, or `None` to
/// let the browser advance focus normally.
///
/// Only the two edges wrap: Tab on the last element goes to the first and
/// Shift+Tab on the first goes to the last.
pub fn wrap_target(len: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_from_last_wraps_to_first() {
        assert_eq!(wrap_target(4, Some(3), false), Some(0));
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        assert_eq!(wrap_target(4, Some(0), true), Some(3));
    }

    #[test]
    fn middle_elements_use_default_advance() {
        assert_eq!(wrap_target(4, Some(1), false), None);
        assert_eq!(wrap_target(4, Some(2), true), None);
        assert_eq!(wrap_target(4, Some(0), false), None);
        assert_eq!(wrap_target(4, Some(3), true), None);
    }

    #[test]
    fn focus_outside_or_empty_menu_is_ignored() {
        assert_eq!(wrap_target(4, None, false), None);
        assert_eq!(wrap_target(0, None, true), None);
    }

    #[test]
    fn single_focusable_stays_put() {
        assert_eq!(wrap_target(1, Some(0), false), Some(0));
        assert_eq!(wrap_target(1, Some(0), true), Some(0));
    }
}
