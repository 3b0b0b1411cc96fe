//! Coordinate transforms between the stage scroll space, the stage pixel
//! space and the preview pixel space.
//!
//! Everything here is a pure function of its inputs. Degenerate geometry
//! (zero scroll range, zero-sized viewports) yields a defined result rather
//! than a division by zero.

use crate::geometry::{Point, Rect, Size};

/// One scroll bar: current value and its inclusive bounds.
///
/// `maximum` is the full content extent of a scrollable axis, not the
/// largest reachable offset. The host scroll view clamps values past
/// [`max_offset`] itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAxis {
    pub value: f32,
    pub minimum: f32,
    pub maximum: f32,
}

impl ScrollAxis {
    pub const fn new(value: f32, minimum: f32, maximum: f32) -> Self {
        Self {
            value,
            minimum,
            maximum,
        }
    }

    /// Axis for a viewport of `viewport` pixels over `content` pixels, scrolled to `value`.
    ///
    /// An axis whose content fits in the viewport has an empty range.
    pub fn for_extent(value: f32, viewport: f32, content: f32) -> Self {
        let maximum = if max_offset(viewport, content) > 0.0 {
            content
        } else {
            0.0
        };
        Self::new(value, 0.0, maximum)
    }

    pub fn contains(&self, v: f32) -> bool {
        self.minimum <= v && v <= self.maximum
    }

    pub fn clamp(&self, v: f32) -> f32 {
        if self.maximum < self.minimum {
            return self.minimum;
        }
        v.clamp(self.minimum, self.maximum)
    }

    /// Apply `v` only if it lies within the bounds. Returns whether it was applied.
    pub fn try_set(&mut self, v: f32) -> bool {
        if !self.contains(v) {
            return false;
        }
        self.value = v;
        true
    }

    /// Fraction of the range scrolled past, `0` when the range is empty.
    fn fraction(&self) -> f32 {
        let f = if self.maximum > 0.0 {
            self.value / self.maximum
        } else {
            0.0
        };
        if f.is_finite() {
            f
        } else {
            0.0
        }
    }
}

/// Largest offset a `viewport` can scroll to over `content`.
pub fn max_offset(viewport: f32, content: f32) -> f32 {
    (content - viewport).max(0.0)
}

/// Horizontal and vertical scroll position of the stage viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub horizontal: ScrollAxis,
    pub vertical: ScrollAxis,
}

impl ScrollState {
    pub const fn new(horizontal: ScrollAxis, vertical: ScrollAxis) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Scroll state of a stage showing `content` through `viewport`, scrolled to `offset`.
    pub fn for_stage(offset: Point, viewport: Size, content: Size) -> Self {
        Self::new(
            ScrollAxis::for_extent(offset.x, viewport.width, content.width),
            ScrollAxis::for_extent(offset.y, viewport.height, content.height),
        )
    }

    pub fn offset(&self) -> Point {
        Point::new(self.horizontal.value, self.vertical.value)
    }
}

/// Share of `content` that a `viewport` shows, as a length in a `preview`-long axis.
fn visible_extent(preview: f32, viewport: f32, content: f32) -> f32 {
    if content > 0.0 {
        preview * viewport.max(0.0) / content
    } else {
        preview
    }
}

/// The stage's visible region expressed in preview pixels.
///
/// The result is clamped so it always lies within
/// `[0, preview.width] x [0, preview.height]`; a degenerate preview gives
/// [`Rect::ZERO`].
pub fn visible_rect_in_preview(
    scroll: &ScrollState,
    stage_viewport: Size,
    stage_content: Size,
    preview: Size,
) -> Rect {
    if preview.is_degenerate() {
        return Rect::ZERO;
    }

    let left = (preview.width * scroll.horizontal.fraction()).clamp(0.0, preview.width);
    let top = (preview.height * scroll.vertical.fraction()).clamp(0.0, preview.height);

    let width = visible_extent(preview.width, stage_viewport.width, stage_content.width)
        .clamp(0.0, preview.width - left);
    let height = visible_extent(preview.height, stage_viewport.height, stage_content.height)
        .clamp(0.0, preview.height - top);

    Rect::new(left, top, width, height)
}

fn point_to_axis(coord: f32, preview_extent: f32, axis: &ScrollAxis) -> f32 {
    if preview_extent > 0.0 {
        coord * axis.maximum / preview_extent
    } else {
        axis.minimum
    }
}

/// Map a preview point to stage scroll values without bounding them.
///
/// Points outside the preview map to values outside the scroll range; the
/// navigation controller relies on that to ignore them.
pub fn preview_point_to_scroll_unclamped(point: Point, preview: Size, scroll: &ScrollState) -> (f32, f32) {
    (
        point_to_axis(point.x, preview.width, &scroll.horizontal),
        point_to_axis(point.y, preview.height, &scroll.vertical),
    )
}

/// Map a preview point to stage scroll values clamped to each axis' bounds.
pub fn preview_point_to_scroll(point: Point, preview: Size, scroll: &ScrollState) -> (f32, f32) {
    let (x, y) = preview_point_to_scroll_unclamped(point, preview, scroll);
    (scroll.horizontal.clamp(x), scroll.vertical.clamp(y))
}
