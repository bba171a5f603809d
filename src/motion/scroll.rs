/// Offset above which the page counts as scrolled. Strictly greater-than:
/// an offset of exactly 50 is still "at the top".
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Where the current scroll offset comes from. The navigation bar reads the
/// real window; tests supply a fixed offset.
pub trait ScrollOffsetSource {
    fn offset(&self) -> f64;
}

pub struct WindowScroll;

impl ScrollOffsetSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
}

/// Non-latched scroll flag: recomputed from the current offset on every
/// notification and free to flip in either direction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollFlag {
    past_threshold: bool,
}

impl ScrollFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the flag and reports whether it changed, so callers can
    /// skip redundant re-renders on the many scroll events that land on the
    /// same side of the threshold.
    pub fn update(&mut self, source: &impl ScrollOffsetSource) -> bool {
        let next = source.offset() > SCROLL_THRESHOLD_PX;
        let changed = next != self.past_threshold;
        self.past_threshold = next;
        changed
    }

    pub fn scrolled_past(&self) -> bool {
        self.past_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollFlag, ScrollOffsetSource};

    struct FixedOffset(f64);

    impl ScrollOffsetSource for FixedOffset {
        fn offset(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn threshold_boundary() {
        let mut flag = ScrollFlag::new();
        flag.update(&FixedOffset(49.0));
        assert!(!flag.scrolled_past());
        flag.update(&FixedOffset(50.0));
        assert!(!flag.scrolled_past());
        flag.update(&FixedOffset(51.0));
        assert!(flag.scrolled_past());
    }

    #[test]
    fn flips_in_both_directions() {
        let mut flag = ScrollFlag::new();
        assert!(flag.update(&FixedOffset(120.0)));
        assert!(flag.scrolled_past());
        assert!(flag.update(&FixedOffset(0.0)));
        assert!(!flag.scrolled_past());
    }

    #[test]
    fn reports_change_only_when_the_flag_moves() {
        let mut flag = ScrollFlag::new();
        assert!(!flag.update(&FixedOffset(10.0)));
        assert!(flag.update(&FixedOffset(200.0)));
        assert!(!flag.update(&FixedOffset(300.0)));
        assert!(flag.update(&FixedOffset(10.0)));
    }
}
