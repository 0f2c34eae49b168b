use serde::{Deserialize, Serialize};

/// Direction of the most recent scroll event.
///
/// `Down` is the forward direction: cards enter from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

impl ScrollDirection {
    pub fn is_forward(self) -> bool {
        matches!(self, ScrollDirection::Down)
    }
}

/// Tracks the last seen vertical offset and the derived direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    last_scroll_y: f64,
    direction: ScrollDirection,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event.
    ///
    /// Strictly greater offsets scroll down; equal or smaller offsets scroll
    /// up. The last offset is always updated.
    pub fn on_scroll(&mut self, current_scroll_y: f64) -> ScrollDirection {
        self.direction = if current_scroll_y > self.last_scroll_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_scroll_y = current_scroll_y;
        self.direction
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }
}
