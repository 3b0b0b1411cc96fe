use crate::geometry::{Point, Size};
use crate::viewport::{preview_point_to_scroll_unclamped, ScrollState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Primary button held down over the preview.
    Dragging,
}

/// Which scroll axes a pointer event moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub horizontal_applied: bool,
    pub vertical_applied: bool,
}

impl NavigationOutcome {
    pub const IGNORED: NavigationOutcome = NavigationOutcome {
        horizontal_applied: false,
        vertical_applied: false,
    };

    /// The indicator rectangle moved, so the preview must be redrawn.
    pub fn needs_preview_repaint(&self) -> bool {
        self.horizontal_applied || self.vertical_applied
    }
}

/// Drag-to-scroll on the preview viewport.
///
/// Positions that map outside the stage's scroll range are dropped rather
/// than clamped, so dragging past the preview edge leaves the view where it was.
#[derive(Debug, Default)]
pub struct NavigationController {
    state: DragState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Button pressed at `point` (preview pixels). The primary button starts
    /// a drag and scrolls to the pressed point straight away.
    pub fn press(
        &mut self,
        button: PointerButton,
        point: Point,
        preview: Size,
        scroll: &mut ScrollState,
    ) -> NavigationOutcome {
        if button != PointerButton::Primary {
            return NavigationOutcome::IGNORED;
        }
        self.state = DragState::Dragging;
        self.moved(point, preview, scroll)
    }

    /// Pointer moved to `point`. Has no effect unless dragging.
    pub fn moved(&mut self, point: Point, preview: Size, scroll: &mut ScrollState) -> NavigationOutcome {
        if self.state != DragState::Dragging {
            return NavigationOutcome::IGNORED;
        }
        let (x, y) = preview_point_to_scroll_unclamped(point, preview, scroll);
        NavigationOutcome {
            horizontal_applied: scroll.horizontal.try_set(x),
            vertical_applied: scroll.vertical.try_set(y),
        }
    }

    pub fn release(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.state = DragState::Idle;
        }
    }
}
