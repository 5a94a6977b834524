//! Viewport intersection.

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with `other`, edges inclusive. Touching rectangles yield a
    /// zero-area intersection rather than `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < x || bottom < y {
            return None;
        }
        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

/// When an observed element counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityPolicy {
    /// Fraction of the element's area that must be inside the root
    pub threshold: f64,
    /// Amount the viewport is shrunk by at the bottom
    pub bottom_margin: f64,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 100.0,
        }
    }
}

impl VisibilityPolicy {
    /// The viewport with the bottom margin applied.
    pub fn root(&self, viewport: Rect) -> Rect {
        Rect {
            height: (viewport.height - self.bottom_margin).max(0.0),
            ..viewport
        }
    }

    /// Share of `target` inside the root, from 0.0 to 1.0.
    ///
    /// Zero-area targets count as fully inside when they touch the root at
    /// all, matching browser intersection semantics.
    pub fn intersection_ratio(&self, target: Rect, viewport: Rect) -> f64 {
        let Some(overlap) = target.intersection(&self.root(viewport)) else {
            return 0.0;
        };

        let area = target.area();
        if area == 0.0 {
            return 1.0;
        }
        (overlap.area() / area).min(1.0)
    }

    pub fn is_visible(&self, target: Rect, viewport: Rect) -> bool {
        self.intersection_ratio(target, viewport) >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_root_shrinks_bottom() {
        let root = VisibilityPolicy::default().root(viewport());
        assert_eq!(root, Rect::new(0.0, 0.0, 1000.0, 700.0));
    }

    #[test]
    fn test_element_fully_inside() {
        let policy = VisibilityPolicy::default();
        let target = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(policy.intersection_ratio(target, viewport()), 1.0);
        assert!(policy.is_visible(target, viewport()));
    }

    #[test]
    fn test_element_below_the_margin_is_hidden() {
        let policy = VisibilityPolicy::default();
        // Inside the viewport, but within the bottom 100 units
        let target = Rect::new(0.0, 720.0, 500.0, 50.0);
        assert!(!policy.is_visible(target, viewport()));
    }

    #[test]
    fn test_threshold_boundary() {
        let policy = VisibilityPolicy::default();
        // 1000 tall section whose top 100 units are inside the root
        let at_threshold = Rect::new(0.0, 600.0, 1000.0, 1000.0);
        assert!(policy.is_visible(at_threshold, viewport()));

        let just_below = Rect::new(0.0, 601.0, 1000.0, 1000.0);
        assert!(!policy.is_visible(just_below, viewport()));
    }

    #[test]
    fn test_zero_width_element() {
        let policy = VisibilityPolicy::default();
        let inside = Rect::new(10.0, 300.0, 0.0, 8.0);
        assert!(policy.is_visible(inside, viewport()));

        let outside = Rect::new(10.0, 900.0, 0.0, 8.0);
        assert!(!policy.is_visible(outside, viewport()));
    }

    #[test]
    fn test_element_above_viewport() {
        let policy = VisibilityPolicy::default();
        let target = Rect::new(0.0, -500.0, 400.0, 300.0);
        assert_eq!(policy.intersection_ratio(target, viewport()), 0.0);
    }
}
