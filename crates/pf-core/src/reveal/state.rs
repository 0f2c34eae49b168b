use super::scroll::ScrollDirection;

/// Horizontal distance a hidden card sits away from its resting position.
pub const ENTRANCE_OFFSET_PX: f64 = 100.0;

/// Per-card animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub in_view: bool,
    pub direction: ScrollDirection,
}

/// Result of feeding one visibility observation into a [`RevealState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    pub state: RevealState,
    /// True on a not-visible to visible edge: the entrance animation replays.
    pub entered: bool,
}

impl RevealState {
    pub fn observe(self, visible: bool, direction: ScrollDirection) -> RevealTransition {
        RevealTransition {
            state: RevealState {
                in_view: visible,
                direction,
            },
            entered: visible && !self.in_view,
        }
    }

    /// Re-aims a hidden card at the side the page currently scrolls from.
    /// A card in view keeps its state.
    pub fn facing(self, direction: ScrollDirection) -> RevealState {
        if self.in_view {
            return self;
        }
        RevealState {
            in_view: false,
            direction,
        }
    }

    /// Horizontal offset in pixels. Zero when in view.
    pub fn offset_px(&self) -> f64 {
        if self.in_view {
            return 0.0;
        }
        match self.direction {
            ScrollDirection::Down => -ENTRANCE_OFFSET_PX,
            ScrollDirection::Up => ENTRANCE_OFFSET_PX,
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.in_view {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_card_offset_depends_on_direction() {
        let down = RevealState {
            in_view: false,
            direction: ScrollDirection::Down,
        };
        let up = RevealState {
            in_view: false,
            direction: ScrollDirection::Up,
        };
        assert_eq!(down.offset_px(), -100.0);
        assert_eq!(up.offset_px(), 100.0);
        assert_eq!(down.opacity(), 0.0);
    }

    #[test]
    fn hidden_card_follows_the_latest_direction() {
        let hidden = RevealState::default().facing(ScrollDirection::Up);
        assert_eq!(hidden.offset_px(), 100.0);

        let shown = hidden.observe(true, ScrollDirection::Up).state;
        assert_eq!(shown.facing(ScrollDirection::Down), shown);
        assert_eq!(shown.offset_px(), 0.0);
    }

    #[test]
    fn entrance_replays_on_every_rising_edge() {
        let mut state = RevealState::default();
        let mut entrances = 0;
        for visible in [true, true, false, true, false, false, true] {
            let transition = state.observe(visible, ScrollDirection::Down);
            entrances += usize::from(transition.entered);
            state = transition.state;
        }
        assert_eq!(entrances, 3);
        assert!(state.in_view);
        assert_eq!(state.offset_px(), 0.0);
    }
}
