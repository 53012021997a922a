//! Swipe gesture controller.
//!
//! Gives physical feedback while a page is dragged horizontally and decides,
//! on release, whether the swipe commits to a navigation. The controller owns
//! its springs exclusively; the presentation layer only reads
//! [`SwipeController::springs`].

use crate::config::swipe::{
    DISTANCE_THRESHOLD, MAX_ROTATION_DEG, MIN_SCALE, ROTATION_FACTOR, RUBBER_BAND_FACTOR,
    SCALE_FACTOR, VELOCITY_THRESHOLD,
};
use crate::core::spring::{Spring, SpringConfig};
use crate::models::{DragSample, DragState, SwipeIntent};

/// Drag feedback and commit decisions for horizontal swipes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeController {
    x: Spring,
    scale: Spring,
    rotate_y: Spring,
    is_dragging: bool,
}

impl SwipeController {
    pub fn new() -> Self {
        let idle = DragState::IDLE;
        Self {
            x: Spring::with_config(idle.drag_x, SpringConfig::STIFF),
            scale: Spring::with_config(idle.drag_scale, SpringConfig::STIFF),
            rotate_y: Spring::with_config(idle.drag_rotate_y, SpringConfig::STIFF),
            is_dragging: false,
        }
    }

    /// Current animated drag values.
    pub fn springs(&self) -> DragState {
        DragState {
            drag_x: self.x.get(),
            drag_scale: self.scale.get(),
            drag_rotate_y: self.rotate_y.get(),
            is_dragging: self.is_dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether any spring is still easing.
    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.scale.is_animating() || self.rotate_y.is_animating()
    }

    /// Tracks the pointer during an active drag.
    ///
    /// `can_drag_left`/`can_drag_right` say whether dragging in that
    /// direction leads anywhere. Movement toward a blocked side is scaled by
    /// the rubber-band factor (not clamped). Values are applied immediately,
    /// without spring easing, so the page follows the pointer exactly.
    pub fn update_drag(&mut self, movement: f64, can_drag_left: bool, can_drag_right: bool) {
        self.is_dragging = true;

        let blocked = (movement > 0.0 && !can_drag_right) || (movement < 0.0 && !can_drag_left);
        let effective = if blocked {
            movement * RUBBER_BAND_FACTOR
        } else {
            movement
        };

        let rotate = (-effective * ROTATION_FACTOR).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG);
        let scale = (1.0 - effective.abs() * SCALE_FACTOR).max(MIN_SCALE);

        self.x.set_immediate(effective);
        self.scale.set_immediate(scale);
        self.rotate_y.set_immediate(rotate);
    }

    /// Decides whether a released swipe navigates.
    ///
    /// Either enough distance or enough speed triggers. A rightward swipe
    /// (`direction > 0`) means "previous" ([`SwipeIntent::Left`]) and needs
    /// `can_go_left`; a leftward one means "next" and needs `can_go_right`.
    pub fn should_navigate(
        &self,
        movement: f64,
        velocity: f64,
        direction: i8,
        can_go_left: bool,
        can_go_right: bool,
    ) -> SwipeIntent {
        let triggered =
            movement.abs() > DISTANCE_THRESHOLD || velocity.abs() > VELOCITY_THRESHOLD;
        if !triggered {
            return SwipeIntent::None;
        }

        match direction {
            d if d > 0 && can_go_left => SwipeIntent::Left,
            d if d < 0 && can_go_right => SwipeIntent::Right,
            _ => SwipeIntent::None,
        }
    }

    /// Feeds one gesture frame; returns the intent when the gesture ends.
    ///
    /// `can_go_left`/`can_go_right` are in intent terms (previous/next route
    /// exists). Active frames update the drag; the final frame decides and
    /// then resets regardless of the decision.
    pub fn handle_sample(
        &mut self,
        sample: DragSample,
        can_go_left: bool,
        can_go_right: bool,
    ) -> SwipeIntent {
        if sample.active {
            // Dragging right heads for the previous route, left for the next
            self.update_drag(sample.movement_x, can_go_right, can_go_left);
            return SwipeIntent::None;
        }

        let intent = self.should_navigate(
            sample.movement_x,
            sample.velocity_x,
            sample.direction_x,
            can_go_left,
            can_go_right,
        );
        self.reset();
        intent
    }

    /// Ends the drag and eases back to the idle state.
    pub fn reset(&mut self) {
        self.is_dragging = false;
        let idle = DragState::IDLE;
        self.x.set_target(idle.drag_x);
        self.scale.set_target(idle.drag_scale);
        self.rotate_y.set_target(idle.drag_rotate_y);
    }

    /// Advances eased animations by `dt_ms`. Returns whether any is still moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let x = self.x.tick(dt_ms);
        let scale = self.scale.tick(dt_ms);
        let rotate = self.rotate_y.tick(dt_ms);
        x || scale || rotate
    }

    /// Stops all animations where they are, without resetting.
    pub fn dispose(&mut self) {
        self.x.stop();
        self.scale.stop();
        self.rotate_y.stop();
    }
}

impl Default for SwipeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_starts_idle() {
        let controller = SwipeController::new();
        assert_eq!(controller.springs(), DragState::IDLE);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_distance_threshold_commits() {
        let controller = SwipeController::new();
        assert_eq!(
            controller.should_navigate(100.0, 0.1, 1, true, true),
            SwipeIntent::Left
        );
    }

    #[test]
    fn test_velocity_threshold_commits() {
        let controller = SwipeController::new();
        assert_eq!(
            controller.should_navigate(10.0, 0.8, -1, true, true),
            SwipeIntent::Right
        );
    }

    #[test]
    fn test_below_thresholds_does_not_commit() {
        let controller = SwipeController::new();
        assert_eq!(
            controller.should_navigate(80.0, 0.5, 1, true, true),
            SwipeIntent::None
        );
        assert_eq!(
            controller.should_navigate(-30.0, 0.2, -1, true, true),
            SwipeIntent::None
        );
    }

    #[test]
    fn test_missing_target_does_not_commit() {
        let controller = SwipeController::new();
        assert_eq!(
            controller.should_navigate(200.0, 2.0, 1, false, true),
            SwipeIntent::None
        );
        assert_eq!(
            controller.should_navigate(-200.0, 2.0, -1, true, false),
            SwipeIntent::None
        );
        assert_eq!(
            controller.should_navigate(200.0, 2.0, 0, true, true),
            SwipeIntent::None
        );
    }

    #[test]
    fn test_rubber_band() {
        let mut controller = SwipeController::new();
        controller.update_drag(200.0, true, false);
        let state = controller.springs();

        assert!(state.is_dragging);
        assert!(approx(state.drag_x, 40.0));
        assert!(approx(state.drag_rotate_y, -2.0));
        assert!(approx(state.drag_scale, 0.98));
    }

    #[test]
    fn test_unblocked_drag_tracks_pointer() {
        let mut controller = SwipeController::new();
        controller.update_drag(-60.0, true, false);
        let state = controller.springs();
        assert!(approx(state.drag_x, -60.0));
        assert!(approx(state.drag_rotate_y, 3.0));
        // Applied immediately, nothing left to ease
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_rotation_and_scale_clamps() {
        let mut controller = SwipeController::new();
        controller.update_drag(-1000.0, true, true);
        let state = controller.springs();
        assert!(approx(state.drag_rotate_y, MAX_ROTATION_DEG));
        assert!(approx(state.drag_scale, MIN_SCALE));

        controller.update_drag(1000.0, true, true);
        assert!(approx(controller.springs().drag_rotate_y, -MAX_ROTATION_DEG));
    }

    #[test]
    fn test_reset_eases_back_to_idle() {
        let mut controller = SwipeController::new();
        controller.update_drag(120.0, true, true);
        controller.reset();

        assert!(!controller.is_dragging());
        assert!(controller.is_animating());
        // Eased, not snapped
        assert!(approx(controller.springs().drag_x, 120.0));

        let mut frames = 0;
        while controller.tick(16.0) {
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(controller.springs(), DragState::IDLE);
    }

    #[test]
    fn test_dispose_stops_without_resetting() {
        let mut controller = SwipeController::new();
        controller.update_drag(120.0, true, true);
        controller.reset();
        controller.tick(16.0);
        let mid = controller.springs();

        controller.dispose();
        assert!(!controller.is_animating());
        assert!(!controller.tick(16.0));
        assert_eq!(controller.springs(), mid);
        assert!(mid.drag_x > 0.0);
    }

    #[test]
    fn test_handle_sample_commits_and_resets() {
        let mut controller = SwipeController::new();
        let moving = DragSample {
            active: true,
            movement_x: 120.0,
            direction_x: 1,
            velocity_x: 0.3,
        };
        assert_eq!(controller.handle_sample(moving, true, false), SwipeIntent::None);
        assert!(controller.is_dragging());
        // Rightward drag toward an existing previous route is not damped
        assert!(approx(controller.springs().drag_x, 120.0));

        let released = DragSample {
            active: false,
            ..moving
        };
        assert_eq!(
            controller.handle_sample(released, true, false),
            SwipeIntent::Left
        );
        assert!(!controller.is_dragging());
        assert!(controller.is_animating());
    }

    #[test]
    fn test_handle_sample_damps_drag_without_target() {
        let mut controller = SwipeController::new();
        let sample = DragSample {
            active: true,
            movement_x: -100.0,
            direction_x: -1,
            velocity_x: 0.0,
        };
        // No next route: leftward drag is rubber-banded
        controller.handle_sample(sample, true, false);
        assert!(approx(controller.springs().drag_x, -20.0));
    }

    #[test]
    fn test_cancelled_gesture_resets() {
        let mut controller = SwipeController::new();
        controller.update_drag(30.0, true, true);
        let released = DragSample {
            active: false,
            movement_x: 30.0,
            direction_x: 1,
            velocity_x: 0.1,
        };
        assert_eq!(
            controller.handle_sample(released, true, true),
            SwipeIntent::None
        );
        assert!(!controller.is_dragging());
    }
}
