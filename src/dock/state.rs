/// Where the floating call-to-action bar is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockState {
    /// Bar rests at the viewport bottom, footer scrolls normally.
    #[default]
    Floating,
    /// Footer is pinned to the viewport bottom and the bar sits on top of it.
    Docked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
    /// No movement since the last update (resize or visibility trigger).
    Still,
}

/// Scroll tracking owned by the dock controller.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Last observed scroll offset, never below zero.
    pub last_scroll_offset: f64,
    pub is_scrolling_down: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new scroll offset and report which way the page moved.
    ///
    /// The comparison uses the raw offset; only the recorded value is
    /// floored at zero.
    pub fn observe(&mut self, current: f64) -> ScrollDirection {
        let previous = self.last_scroll_offset;
        self.is_scrolling_down = current > previous;
        self.last_scroll_offset = current.max(0.0);

        if self.is_scrolling_down {
            ScrollDirection::Down
        } else if current < previous {
            ScrollDirection::Up
        } else {
            ScrollDirection::Still
        }
    }
}

/// Geometry read from the page in one go, once per recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    /// Footer top edge relative to the viewport.
    pub footer_top: f64,
    pub footer_height: f64,
}

impl Layout {
    /// The footer has reached the viewport.
    pub fn footer_in_view(&self) -> bool {
        self.footer_top <= self.viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockDecision {
    pub state: DockState,
    /// Pixel offset of the bar from the viewport bottom.
    pub bar_bottom: f64,
}

impl DockDecision {
    pub const FLOATING: DockDecision = DockDecision {
        state: DockState::Floating,
        bar_bottom: 0.0,
    };

    fn docked(footer_height: f64) -> Self {
        Self {
            state: DockState::Docked,
            bar_bottom: footer_height,
        }
    }

    pub fn footer_fixed(&self) -> bool {
        self.state == DockState::Docked
    }
}

/// Decide the anchoring for one snapshot.
///
/// A still page keeps whatever state it was in so that repeated triggers
/// without scrolling never flip the bar.
pub fn decide(layout: &Layout, direction: ScrollDirection, current: DockState) -> DockDecision {
    if !layout.footer_in_view() {
        return DockDecision::FLOATING;
    }

    match (direction, current) {
        (ScrollDirection::Down, _) | (ScrollDirection::Still, DockState::Docked) => {
            DockDecision::docked(layout.footer_height)
        }
        (ScrollDirection::Up, _) | (ScrollDirection::Still, DockState::Floating) => {
            DockDecision::FLOATING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(scroll_offset: f64, footer_top: f64) -> Layout {
        Layout {
            scroll_offset,
            viewport_height: 800.0,
            footer_top,
            footer_height: 200.0,
        }
    }

    #[test]
    fn test_direction_follows_offset_comparison() {
        let mut state = ScrollState::new();
        let offsets = [0.0, 10.0, 10.0, 5.0, 400.0, 399.5, 399.5, 1000.0];
        let mut previous = 0.0;
        for offset in offsets {
            let direction = state.observe(offset);
            assert_eq!(state.is_scrolling_down, offset > previous);
            assert_eq!(direction == ScrollDirection::Down, offset > previous);
            previous = offset;
        }
    }

    #[test]
    fn test_tie_is_not_down() {
        let mut state = ScrollState::new();
        state.observe(300.0);
        assert_eq!(state.observe(300.0), ScrollDirection::Still);
        assert!(!state.is_scrolling_down);
    }

    #[test]
    fn test_recorded_offset_is_floored_at_zero() {
        let mut state = ScrollState::new();
        assert_eq!(state.observe(-40.0), ScrollDirection::Up);
        assert_eq!(state.last_scroll_offset, 0.0);
        assert!(!state.is_scrolling_down);

        // Coming back from overscroll to the top is not movement.
        assert_eq!(state.observe(0.0), ScrollDirection::Still);
    }

    #[test]
    fn test_footer_below_viewport_always_floats() {
        let below = layout(150.0, 1000.0);
        for direction in [ScrollDirection::Down, ScrollDirection::Up, ScrollDirection::Still] {
            for current in [DockState::Floating, DockState::Docked] {
                assert_eq!(decide(&below, direction, current), DockDecision::FLOATING);
            }
        }
    }

    #[test]
    fn test_footer_in_view_scrolling_down_docks() {
        let decision = decide(&layout(1300.0, 600.0), ScrollDirection::Down, DockState::Floating);
        assert_eq!(decision.state, DockState::Docked);
        assert_eq!(decision.bar_bottom, 200.0);
        assert!(decision.footer_fixed());
    }

    #[test]
    fn test_footer_in_view_scrolling_up_floats() {
        let decision = decide(&layout(1250.0, 600.0), ScrollDirection::Up, DockState::Docked);
        assert_eq!(decision, DockDecision::FLOATING);
        assert!(!decision.footer_fixed());
    }

    #[test]
    fn test_footer_top_equal_to_viewport_counts_as_in_view() {
        let edge = layout(900.0, 800.0);
        assert!(edge.footer_in_view());
        assert_eq!(decide(&edge, ScrollDirection::Down, DockState::Floating).state, DockState::Docked);
    }

    #[test]
    fn test_still_keeps_current_state() {
        let in_view = layout(1300.0, 600.0);
        assert_eq!(
            decide(&in_view, ScrollDirection::Still, DockState::Docked),
            DockDecision { state: DockState::Docked, bar_bottom: 200.0 }
        );
        assert_eq!(
            decide(&in_view, ScrollDirection::Still, DockState::Floating),
            DockDecision::FLOATING
        );
    }
}
