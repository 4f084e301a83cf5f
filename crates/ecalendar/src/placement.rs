//! Where to put the floating panel relative to its anchor.
//!
//! All inputs are in the coordinate space of the viewport (the anchor's
//! bounding box as reported by the host), the output is the panel's fixed
//! top-left position divided by the zoom factor.

use emath::{Pos2, Rect, Vec2, pos2};

/// Height assumed for the panel until it has been measured once.
pub const ESTIMATED_PANEL_HEIGHT: f32 = 400.0;

/// Which side of the anchor the panel opened on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Side {
    Above,

    #[default]
    Below,
}

/// The result of [`compute_placement`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Placement {
    /// Top-left corner of the panel.
    pub pos: Pos2,
    pub side: Side,
}

/// Tuning for [`compute_placement`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PlacementOptions {
    /// Vertical distance between anchor and panel.
    pub gap: f32,

    /// Minimum distance to the viewport edges when clamping horizontally.
    pub padding: f32,

    /// Below this viewport width the panel is kept inside the right edge.
    pub narrow_breakpoint: f32,

    /// Horizontal scroll offset of the page, added to the left edge.
    pub scroll_x: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            gap: 8.0,
            padding: 16.0,
            narrow_breakpoint: 768.0,
            scroll_x: 0.0,
        }
    }
}

impl PlacementOptions {
    #[inline]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    #[inline]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    #[inline]
    pub fn narrow_breakpoint(mut self, narrow_breakpoint: f32) -> Self {
        self.narrow_breakpoint = narrow_breakpoint;
        self
    }

    #[inline]
    pub fn scroll_x(mut self, scroll_x: f32) -> Self {
        self.scroll_x = scroll_x;
        self
    }
}

/// A zoom factor that is not a positive finite number counts as `1.0`.
pub fn sanitize_zoom(zoom_factor: f32) -> f32 {
    if zoom_factor.is_finite() && zoom_factor > 0.0 {
        zoom_factor
    } else {
        1.0
    }
}

/// Place a panel of `panel_size` next to `anchor` inside a viewport of `viewport_size`.
///
/// The panel goes below the anchor unless it does not fit there but does fit above.
/// On viewports narrower than [`PlacementOptions::narrow_breakpoint`] the panel is
/// pulled left so it does not overflow the right edge.
pub fn compute_placement(
    anchor: Rect,
    panel_size: Vec2,
    viewport_size: Vec2,
    zoom_factor: f32,
    options: &PlacementOptions,
) -> Placement {
    let zoom = sanitize_zoom(zoom_factor);
    let needed = panel_size.y + options.gap;

    let space_below = viewport_size.y - anchor.bottom();
    let space_above = anchor.top();

    let (top, side) = if space_below < needed && space_above > needed {
        ((anchor.top() - needed) / zoom, Side::Above)
    } else {
        ((anchor.bottom() + options.gap) / zoom, Side::Below)
    };

    let mut left = anchor.left() / zoom + options.scroll_x;
    if viewport_size.x < options.narrow_breakpoint {
        let max_left = (viewport_size.x - panel_size.x - options.padding) / zoom;
        if left > max_left {
            left = max_left.max(options.padding / zoom);
        }
    }

    Placement {
        pos: pos2(left, top),
        side,
    }
}

#[cfg(test)]
mod tests {
    use emath::vec2;

    use super::*;

    fn anchor(left: f32, top: f32) -> Rect {
        Rect::from_min_size(pos2(left, top), vec2(200.0, 48.0))
    }

    #[test]
    fn test_below_by_default() {
        let placement = compute_placement(
            anchor(100.0, 100.0),
            vec2(256.0, 300.0),
            vec2(1280.0, 900.0),
            1.0,
            &PlacementOptions::default(),
        );
        assert_eq!(placement.side, Side::Below);
        assert_eq!(placement.pos, pos2(100.0, 156.0));
    }

    #[test]
    fn test_flips_above_near_bottom() {
        let anchor = anchor(100.0, 800.0);
        let placement = compute_placement(
            anchor,
            vec2(256.0, 300.0),
            vec2(1280.0, 900.0),
            1.0,
            &PlacementOptions::default(),
        );
        assert_eq!(placement.side, Side::Above);
        assert!(placement.pos.y < anchor.top());
        assert_eq!(placement.pos.y, 800.0 - 300.0 - 8.0);
    }

    #[test]
    fn test_stays_below_when_neither_side_fits() {
        // 150 px above, 50 px below: not enough room anywhere, keep the default.
        let placement = compute_placement(
            anchor(0.0, 150.0),
            vec2(256.0, 400.0),
            vec2(1280.0, 248.0),
            1.0,
            &PlacementOptions::default(),
        );
        assert_eq!(placement.side, Side::Below);
    }

    #[test]
    fn test_narrow_viewport_clamps_right_edge() {
        let options = PlacementOptions::default();
        let viewport = vec2(375.0, 800.0);
        let panel = vec2(256.0, 300.0);
        let placement = compute_placement(anchor(300.0, 100.0), panel, viewport, 1.0, &options);
        assert!(placement.pos.x + panel.x <= viewport.x - options.padding);
        assert!(placement.pos.x >= options.padding);
    }

    #[test]
    fn test_narrow_clamp_never_passes_padding() {
        // The panel is wider than the viewport: pin it to the left padding.
        let options = PlacementOptions::default();
        let placement = compute_placement(
            anchor(200.0, 100.0),
            vec2(520.0, 300.0),
            vec2(375.0, 800.0),
            1.0,
            &options,
        );
        assert_eq!(placement.pos.x, options.padding);
    }

    #[test]
    fn test_wide_viewport_does_not_clamp() {
        let placement = compute_placement(
            anchor(1200.0, 100.0),
            vec2(520.0, 300.0),
            vec2(1280.0, 800.0),
            1.0,
            &PlacementOptions::default(),
        );
        assert_eq!(placement.pos.x, 1200.0);
    }

    #[test]
    fn test_zoom_and_scroll() {
        let options = PlacementOptions::default().scroll_x(30.0);
        let placement = compute_placement(
            anchor(100.0, 100.0),
            vec2(256.0, 300.0),
            vec2(1280.0, 900.0),
            2.0,
            &options,
        );
        assert_eq!(placement.pos, pos2(50.0 + 30.0, 78.0));

        let unzoomed = compute_placement(
            anchor(100.0, 100.0),
            vec2(256.0, 300.0),
            vec2(1280.0, 900.0),
            f32::NAN,
            &PlacementOptions::default(),
        );
        assert_eq!(unzoomed.pos, pos2(100.0, 156.0));
    }
}
