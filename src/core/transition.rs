//! Page transition calculations.
//!
//! Pure functions mapping a pair of routes to a transition type, a duration,
//! and the keyframes the page host animates between. Nothing here holds state.

use crate::config::transition::DURATION_MS;
use crate::models::{PageAnimation, PageFrame, Route, TransitionConfig, TransitionType};

/// Classify the change from `from` to `to`.
///
/// - `None` when there is no previous route or the route did not change
/// - `SlideLeft` when `to` is deeper in the navigation order
/// - `SlideRight` when `to` is shallower
/// - `Fade` otherwise (equal depth, or a route without depth)
pub fn get_transition_type(from: Option<Route>, to: Route) -> TransitionType {
    let Some(from) = from else {
        return TransitionType::None;
    };
    if from == to {
        return TransitionType::None;
    }

    match (from.depth(), to.depth()) {
        (Some(a), Some(b)) if b > a => TransitionType::SlideLeft,
        (Some(a), Some(b)) if b < a => TransitionType::SlideRight,
        _ => TransitionType::Fade,
    }
}

/// Transition type with its duration: 0ms for `None`, [`DURATION_MS`] otherwise.
pub fn get_transition_config(from: Option<Route>, to: Route) -> TransitionConfig {
    let kind = get_transition_type(from, to);
    let duration_ms = match kind {
        TransitionType::None => 0,
        _ => DURATION_MS,
    };
    TransitionConfig { kind, duration_ms }
}

/// Number of steps between two routes in the navigation order.
///
/// Routes without depth are treated as adjacent to nothing (distance 0).
pub fn route_distance(from: Option<Route>, to: Route) -> usize {
    match (from.and_then(Route::depth), to.depth()) {
        (Some(a), Some(b)) => a.abs_diff(b),
        _ => 0,
    }
}

/// Keyframes for a transition of `kind` across `distance` steps.
///
/// Distance 0 fades, distance 1 slides, anything further tumbles in 3-D.
pub fn get_animation_config(kind: TransitionType, distance: usize) -> PageAnimation {
    let forward = match kind {
        TransitionType::None => return PageAnimation::default(),
        TransitionType::Fade => return get_fade_animation(),
        TransitionType::SlideLeft => true,
        TransitionType::SlideRight => false,
    };

    match distance {
        0 => get_fade_animation(),
        1 => get_slide_animation(forward),
        _ => get_tumble_animation(forward, distance),
    }
}

/// Opacity-only transition.
pub fn get_fade_animation() -> PageAnimation {
    let hidden = PageFrame {
        opacity: 0.0,
        ..PageFrame::IDENTITY
    };
    PageAnimation {
        initial: hidden,
        animate: PageFrame::IDENTITY,
        exit: hidden,
    }
}

/// 2-D slide with a slight scale-down of both pages.
///
/// Forward enters from the right and pushes the old page left.
pub fn get_slide_animation(forward: bool) -> PageAnimation {
    let sign = direction_sign(forward);
    PageAnimation {
        initial: PageFrame {
            x_percent: 100.0 * sign,
            scale: 0.92,
            rotate_y: 0.0,
            opacity: 1.0,
        },
        animate: PageFrame::IDENTITY,
        exit: PageFrame {
            x_percent: -30.0 * sign,
            scale: 0.92,
            rotate_y: 0.0,
            opacity: 0.5,
        },
    }
}

/// 3-D tumble for jumps of two or more steps.
///
/// Rotation grows with distance (capped at four steps); its sign follows the
/// direction so forward jumps turn the page away to the left.
pub fn get_tumble_animation(forward: bool, distance: usize) -> PageAnimation {
    let sign = direction_sign(forward);
    let steps = distance.clamp(2, 4) as f64;
    let rotation = 45.0 + 15.0 * (steps - 2.0);

    PageAnimation {
        initial: PageFrame {
            x_percent: 100.0 * sign,
            scale: 0.8,
            rotate_y: -rotation * sign,
            opacity: 0.0,
        },
        animate: PageFrame::IDENTITY,
        exit: PageFrame {
            x_percent: -100.0 * sign,
            scale: 0.8,
            rotate_y: rotation * sign,
            opacity: 0.0,
        },
    }
}

fn direction_sign(forward: bool) -> f64 {
    if forward { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_type() {
        assert_eq!(
            get_transition_type(Some(Route::Home), Route::Wallet),
            TransitionType::SlideLeft
        );
        assert_eq!(
            get_transition_type(Some(Route::Wallet), Route::Home),
            TransitionType::SlideRight
        );
        assert_eq!(get_transition_type(None, Route::Home), TransitionType::None);
        assert_eq!(
            get_transition_type(Some(Route::Home), Route::Home),
            TransitionType::None
        );
    }

    #[test]
    fn test_unrelated_routes_fade() {
        assert_eq!(
            get_transition_type(Some(Route::Home), Route::NotFound),
            TransitionType::Fade
        );
        assert_eq!(
            get_transition_type(Some(Route::NotFound), Route::Settings),
            TransitionType::Fade
        );
    }

    #[test]
    fn test_transition_config_duration() {
        let none = get_transition_config(None, Route::Home);
        assert_eq!(none.kind, TransitionType::None);
        assert_eq!(none.duration_ms, 0);

        let slide = get_transition_config(Some(Route::Home), Route::Showcase);
        assert_eq!(slide.kind, TransitionType::SlideLeft);
        assert_eq!(slide.duration_ms, 300);

        let fade = get_transition_config(Some(Route::Home), Route::NotFound);
        assert_eq!(fade.duration_ms, 300);
    }

    #[test]
    fn test_route_distance() {
        assert_eq!(route_distance(Some(Route::Home), Route::Showcase), 1);
        assert_eq!(route_distance(Some(Route::Settings), Route::Home), 5);
        assert_eq!(route_distance(None, Route::Home), 0);
        assert_eq!(route_distance(Some(Route::NotFound), Route::Home), 0);
    }

    #[test]
    fn test_animation_by_distance() {
        let fade = get_animation_config(TransitionType::SlideLeft, 0);
        assert_eq!(fade, get_fade_animation());
        assert_eq!(fade.initial.x_percent, 0.0);
        assert_eq!(fade.initial.opacity, 0.0);

        let slide = get_animation_config(TransitionType::SlideLeft, 1);
        assert_eq!(slide.initial.x_percent, 100.0);
        assert_eq!(slide.initial.rotate_y, 0.0);
        assert!(slide.initial.scale < 1.0);

        let tumble = get_animation_config(TransitionType::SlideLeft, 3);
        assert_ne!(tumble.initial.rotate_y, 0.0);
        assert_eq!(tumble.animate, PageFrame::IDENTITY);
    }

    #[test]
    fn test_tumble_rotation_sign_follows_direction() {
        let forward = get_tumble_animation(true, 2);
        let backward = get_tumble_animation(false, 2);
        assert!(forward.initial.rotate_y < 0.0);
        assert!(backward.initial.rotate_y > 0.0);
        assert_eq!(forward.initial.rotate_y, -backward.initial.rotate_y);
        assert_eq!(forward.exit.x_percent, -100.0);
        assert_eq!(backward.exit.x_percent, 100.0);
    }

    #[test]
    fn test_tumble_rotation_is_capped() {
        let four = get_tumble_animation(true, 4);
        let five = get_tumble_animation(true, 5);
        assert_eq!(four, five);
        assert_eq!(get_tumble_animation(true, 2).exit.rotate_y, 45.0);
        assert_eq!(four.exit.rotate_y, 75.0);
    }

    #[test]
    fn test_slide_right_mirrors_slide_left() {
        let left = get_animation_config(TransitionType::SlideLeft, 1);
        let right = get_animation_config(TransitionType::SlideRight, 1);
        assert_eq!(left.initial.x_percent, -right.initial.x_percent);
        assert_eq!(left.exit.x_percent, -right.exit.x_percent);
    }

    #[test]
    fn test_none_and_fade_ignore_distance() {
        assert_eq!(
            get_animation_config(TransitionType::None, 3),
            PageAnimation::default()
        );
        assert_eq!(
            get_animation_config(TransitionType::Fade, 3),
            get_fade_animation()
        );
    }
}
