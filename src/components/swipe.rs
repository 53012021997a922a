//! Swipe navigation area.
//!
//! Feeds touch and mouse positions through [`GestureTracker`] into the
//! [`SwipeController`] and turns a committed swipe into a navigation to the
//! neighbouring route in the navigation order.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::router::RouterContext;
use crate::config::swipe::FRAME_INTERVAL_MS;
use crate::core::{GestureTracker, SwipeController};
use crate::models::{DragSample, DragState, SwipeIntent};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Gesture state shared by the swipe area and the page host.
#[derive(Clone, Copy)]
pub struct SwipeContext {
    pub controller: RwSignal<SwipeController>,
    tracker: StoredValue<GestureTracker>,
    /// Spring frame driver, present while the springs are easing.
    frames: StoredValue<Option<Interval>, LocalStorage>,
    router: RouterContext,
}

impl SwipeContext {
    pub fn new(router: RouterContext) -> Self {
        Self {
            controller: RwSignal::new(SwipeController::new()),
            tracker: StoredValue::new(GestureTracker::new()),
            frames: StoredValue::new_local(None),
            router,
        }
    }

    /// Current drag feedback (tracked).
    pub fn drag_state(&self) -> DragState {
        self.controller.with(SwipeController::springs)
    }

    pub fn is_dragging_untracked(&self) -> bool {
        self.controller.with_untracked(SwipeController::is_dragging)
    }

    pub fn start(&self, x: f64) {
        self.stop_frames();
        self.tracker.update_value(|t| t.start(x, dom::now_ms()));
    }

    pub fn move_to(&self, x: f64) {
        let mut sample = None;
        self.tracker.update_value(|t| sample = t.move_to(x, dom::now_ms()));
        if let Some(sample) = sample {
            self.feed(sample);
        }
    }

    pub fn end(&self) {
        let mut sample = None;
        self.tracker.update_value(|t| sample = t.end(dom::now_ms()));
        if let Some(sample) = sample {
            self.feed(sample);
        }
    }

    /// Drops the gesture in progress and eases the page back.
    pub fn cancel(&self) {
        self.tracker.update_value(GestureTracker::cancel);
        self.controller.update(SwipeController::reset);
        self.start_frames();
    }

    /// Stops gesture tracking and spring animation in place.
    pub fn dispose(&self) {
        self.tracker.update_value(GestureTracker::cancel);
        self.stop_frames();
        self.controller.try_update(SwipeController::dispose);
    }

    fn feed(&self, sample: DragSample) {
        let current = self.router.store.with_untracked(|s| s.current_route());
        let previous = current.previous();
        let next = current.next();

        let mut intent = SwipeIntent::None;
        self.controller.update(|c| {
            intent = c.handle_sample(sample, previous.is_some(), next.is_some());
        });
        if sample.active {
            return;
        }

        self.start_frames();
        let target = match intent {
            SwipeIntent::Left => previous,
            SwipeIntent::Right => next,
            SwipeIntent::None => None,
        };
        if let Some(route) = target {
            log::debug!("swipe {:?} from {} to {}", intent, current, route);
            self.router.go(route);
        }
    }

    fn start_frames(&self) {
        if self.frames.with_value(Option::is_some) {
            return;
        }
        let controller = self.controller;
        let frames = self.frames;
        let mut last = dom::now_ms();
        let interval = Interval::new(FRAME_INTERVAL_MS, move || {
            let now = dom::now_ms();
            let dt = now - last;
            last = now;
            let moving = controller
                .try_update(|c| c.tick(dt))
                .unwrap_or(false);
            if !moving {
                frames.set_value(None);
            }
        });
        self.frames.set_value(Some(interval));
    }

    fn stop_frames(&self) {
        self.frames.try_set_value(None);
    }
}

/// Horizontal swipe surface wrapping the page host.
#[component]
pub fn SwipeArea(children: Children) -> impl IntoView {
    let swipe = use_context::<SwipeContext>().expect("SwipeContext must be provided");

    let on_touch_start = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            swipe.start(touch.client_x() as f64);
        }
    };

    let on_touch_move = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            swipe.move_to(touch.client_x() as f64);
        }
    };

    let on_touch_end = move |_: leptos::ev::TouchEvent| {
        swipe.end();
    };

    let on_touch_cancel = move |_: leptos::ev::TouchEvent| {
        swipe.cancel();
    };

    // Mouse handlers for desktop testing
    let on_mouse_down = move |event: leptos::ev::MouseEvent| {
        event.prevent_default();
        swipe.start(event.client_x() as f64);
    };

    let on_mouse_move = move |event: leptos::ev::MouseEvent| {
        swipe.move_to(event.client_x() as f64);
    };

    let on_mouse_up = move |_: leptos::ev::MouseEvent| {
        swipe.end();
    };

    let area_class = move || {
        if swipe.drag_state().is_dragging {
            format!("{} {}", css::swipeArea, css::swipeAreaDragging)
        } else {
            css::swipeArea.to_string()
        }
    };

    view! {
        <div
            class=area_class
            style=move || swipe.drag_state().to_style()
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_up
        >
            {children()}
        </div>
    }
}
