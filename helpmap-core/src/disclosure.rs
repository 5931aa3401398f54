//! Show/hide details section and the scroll-to-top button.

/// Scroll offset after which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 200.0;

/// Expandable details block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Label for the toggle button in the current state.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        if self.open { "Hide" } else { "More..." }
    }

    /// CSS `display` value for the details block.
    #[must_use]
    pub const fn display(self) -> &'static str {
        if self.open { "block" } else { "none" }
    }
}

#[must_use]
pub fn scroll_top_visible(scroll_offset: f64) -> bool {
    scroll_offset > SCROLL_TOP_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_label_and_display() {
        let closed = Disclosure::default();
        assert_eq!(closed.button_label(), "More...");
        assert_eq!(closed.display(), "none");
        let open = closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.button_label(), "Hide");
        assert_eq!(open.toggled(), closed);
    }

    #[test]
    fn scroll_button_threshold_is_exclusive() {
        assert!(!scroll_top_visible(200.0));
        assert!(scroll_top_visible(200.5));
    }
}
