//! Swipe gesture data types.

/// One frame of a horizontal drag, as delivered by the gesture tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSample {
    /// Pointer is still down.
    pub active: bool,
    /// Horizontal movement since the drag started, in pixels.
    pub movement_x: f64,
    /// Sign of the latest movement: `1` rightward, `-1` leftward, `0` none.
    pub direction_x: i8,
    /// Absolute horizontal velocity in px/ms.
    pub velocity_x: f64,
}

/// Navigation intent decided at the end of a swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Go to the previous route (rightward swipe)
    Left,
    /// Go to the next route (leftward swipe)
    Right,
    #[default]
    None,
}

/// Current animated drag values, read by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub drag_x: f64,
    pub drag_scale: f64,
    pub drag_rotate_y: f64,
    pub is_dragging: bool,
}

impl DragState {
    /// Resting state: no offset, full scale, no rotation.
    pub const IDLE: DragState = DragState {
        drag_x: 0.0,
        drag_scale: 1.0,
        drag_rotate_y: 0.0,
        is_dragging: false,
    };

    /// Inline transform binding for the dragged page.
    pub fn to_style(&self) -> String {
        format!(
            "transform: perspective(1200px) translateX({:.2}px) scale({:.4}) rotateY({:.2}deg);",
            self.drag_x, self.drag_scale, self.drag_rotate_y
        )
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::IDLE
    }
}
