use crate::config::SCROLL_THRESHOLD_PX;

/// Whether the viewport has moved away from the top of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD_PX {
            ScrollState::Scrolled
        } else {
            ScrollState::AtTop
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollState::Scrolled
    }
}

/// Folds scroll notifications into a `ScrollState`, reporting only actual
/// transitions. Once deactivated it ignores everything.
#[derive(Debug)]
pub struct ScrollTracker {
    state: ScrollState,
    active: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            state: ScrollState::AtTop,
            active: true,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the new state if this offset crossed the threshold.
    pub fn observe(&mut self, offset: f64) -> Option<ScrollState> {
        if !self.active {
            return None;
        }
        let next = ScrollState::from_offset(offset);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater_than_twenty() {
        assert_eq!(ScrollState::from_offset(0.0), ScrollState::AtTop);
        assert_eq!(ScrollState::from_offset(20.0), ScrollState::AtTop);
        assert_eq!(ScrollState::from_offset(21.0), ScrollState::Scrolled);
        assert_eq!(ScrollState::from_offset(1000.0), ScrollState::Scrolled);
        assert!(ScrollState::from_offset(20.5).is_scrolled());
    }

    #[test]
    fn starts_at_top() {
        let tracker = ScrollTracker::new();
        assert_eq!(tracker.state(), ScrollState::AtTop);
        assert_eq!(ScrollState::default(), ScrollState::AtTop);
    }

    #[test]
    fn reports_each_transition_once() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(21.0), Some(ScrollState::Scrolled));
        assert_eq!(tracker.observe(21.0), None);
        assert_eq!(tracker.observe(400.0), None);
        assert_eq!(tracker.observe(20.0), Some(ScrollState::AtTop));
        assert_eq!(tracker.observe(0.0), None);
        assert_eq!(tracker.observe(50.0), Some(ScrollState::Scrolled));
        assert_eq!(tracker.state(), ScrollState::Scrolled);
    }

    #[test]
    fn offsets_below_threshold_from_top_are_silent() {
        let mut tracker = ScrollTracker::new();
        for offset in [0.0, 5.0, 19.9, 20.0] {
            assert_eq!(tracker.observe(offset), None);
        }
        assert_eq!(tracker.state(), ScrollState::AtTop);
    }

    #[test]
    fn deactivated_tracker_ignores_notifications() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(500.0);
        tracker.deactivate();
        assert!(!tracker.is_active());
        assert_eq!(tracker.observe(0.0), None);
        assert_eq!(tracker.state(), ScrollState::Scrolled);
    }
}
