//! Pixel math for the drag-scrolled gallery on narrow viewports.
//!
//! The track renders the image sequence twice, so scrolling is defined over
//! a loop of `loop_width` pixels (the width of one copy). Dragging moves the
//! offset 1:1 against pointer movement and wraps at the copy boundary so the
//! loop point stays imperceptible.

/// How long after pointer release the track still swallows click events, so
/// letting go of a drag does not activate whatever is under the finger.
pub const CLICK_SUPPRESS_MS: u32 = 100;

/// A drag in progress: where the pointer went down and what the scroll
/// offset was at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub pointer_x: f64,
    pub scroll_offset: f64,
}

impl DragStart {
    pub fn new(pointer_x: f64, scroll_offset: f64) -> Self {
        Self {
            pointer_x,
            scroll_offset,
        }
    }

    /// Offset after the pointer moved to `pointer_x`, 1:1 and inverted
    /// (dragging left moves the content left, i.e. scrolls right).
    pub fn offset_at(&self, pointer_x: f64) -> f64 {
        self.scroll_offset - (pointer_x - self.pointer_x)
    }
}

/// Wrap an offset into `[0, loop_width)`. Handles offsets more than one
/// loop out of range, which a fast fling can produce.
pub fn wrap_offset(offset: f64, loop_width: f64) -> f64 {
    if loop_width <= 0.0 {
        return 0.0;
    }
    let wrapped = offset % loop_width;
    if wrapped < 0.0 {
        wrapped + loop_width
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_one_to_one() {
        let start = DragStart::new(200.0, 500.0);
        assert_eq!(start.offset_at(200.0), 500.0);
        // Finger moves right 60px -> content follows, offset shrinks.
        assert_eq!(start.offset_at(260.0), 440.0);
        // Finger moves left 60px -> offset grows.
        assert_eq!(start.offset_at(140.0), 560.0);
    }

    #[test]
    fn offset_wraps_at_the_copy_boundary() {
        assert_eq!(wrap_offset(0.0, 1400.0), 0.0);
        assert_eq!(wrap_offset(1399.0, 1400.0), 1399.0);
        assert_eq!(wrap_offset(1400.0, 1400.0), 0.0);
        assert_eq!(wrap_offset(1450.0, 1400.0), 50.0);
    }

    #[test]
    fn negative_offsets_wrap_backwards() {
        assert_eq!(wrap_offset(-10.0, 1400.0), 1390.0);
        assert_eq!(wrap_offset(-1410.0, 1400.0), 1390.0);
    }

    #[test]
    fn degenerate_loop_width_is_pinned() {
        assert_eq!(wrap_offset(123.0, 0.0), 0.0);
    }
}
