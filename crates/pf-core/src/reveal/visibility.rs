//! Visibility arithmetic shared by the DOM observer and tests.

/// Share of a card's area that must be inside the viewport to count as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Element box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Fraction in `[0, 1]` of `rect`'s area that lies inside the viewport.
///
/// Degenerate boxes (zero or negative area) are never visible.
pub fn visible_fraction(rect: Rect, viewport: Viewport) -> f64 {
    let area = rect.width * rect.height;
    if area.is_nan() || area <= 0.0 {
        return 0.0;
    }

    let visible_w = overlap(rect.left, rect.left + rect.width, 0.0, viewport.width);
    let visible_h = overlap(rect.top, rect.top + rect.height, 0.0, viewport.height);

    ((visible_w * visible_h) / area).clamp(0.0, 1.0)
}

fn overlap(start: f64, end: f64, lower: f64, upper: f64) -> f64 {
    (end.min(upper) - start.max(lower)).max(0.0)
}

/// Turns a stream of fractions into visibility changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    visible: Option<bool>,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: None,
        }
    }

    /// Returns the new visibility when it differs from the previous one.
    /// The first observation is always reported.
    pub fn update(&mut self, fraction: f64) -> Option<bool> {
        let visible = fraction > 0.0 && fraction >= self.threshold;
        if self.visible == Some(visible) {
            return None;
        }
        self.visible = Some(visible);
        Some(visible)
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn card(top: f64) -> Rect {
        Rect {
            top,
            left: 100.0,
            width: 300.0,
            height: 200.0,
        }
    }

    #[test]
    fn fully_inside_is_one() {
        assert_eq!(visible_fraction(card(100.0), VIEWPORT), 1.0);
    }

    #[test]
    fn partially_below_the_fold() {
        // 50 of 200 px visible
        let fraction = visible_fraction(card(750.0), VIEWPORT);
        assert!((fraction - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn outside_or_empty_is_zero() {
        assert_eq!(visible_fraction(card(-500.0), VIEWPORT), 0.0);
        let empty = Rect {
            top: 0.0,
            left: 0.0,
            width: 0.0,
            height: 10.0,
        };
        assert_eq!(visible_fraction(empty, VIEWPORT), 0.0);
    }

    #[test]
    fn gate_reports_only_changes() {
        let mut gate = VisibilityGate::new(0.3);
        assert_eq!(gate.update(0.0), Some(false));
        assert_eq!(gate.update(0.1), None);
        assert_eq!(gate.update(0.3), Some(true));
        assert_eq!(gate.update(0.9), None);
        assert_eq!(gate.update(0.29), Some(false));
    }

    #[test]
    fn gate_with_zero_threshold_still_needs_some_overlap() {
        let mut gate = VisibilityGate::new(0.0);
        assert_eq!(gate.update(0.0), Some(false));
        assert_eq!(gate.update(0.01), Some(true));
    }
}
