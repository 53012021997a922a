//! Damped spring animation.
//!
//! A [`Spring`] eases a scalar toward its target. The owner calls
//! [`Spring::tick`] once per frame; everything else (jumps, retargeting,
//! stopping) is immediate.

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Balanced, close to critically damped.
    pub const DEFAULT: SpringConfig = SpringConfig {
        stiffness: 170.0,
        damping: 26.0,
        mass: 1.0,
    };

    /// Quick settle for snapping a dragged page back.
    pub const STIFF: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Distance from target under which the spring may come to rest.
const REST_DISPLACEMENT: f64 = 0.001;
/// Speed (units per second) under which the spring may come to rest.
const REST_VELOCITY: f64 = 0.001;
/// Integration step in milliseconds.
const STEP_MS: f64 = 1.0;
/// Longest frame integrated at once; longer gaps (background tab) are clipped.
const MAX_FRAME_MS: f64 = 64.0;

/// A scalar value animated by a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
    animating: bool,
}

impl Spring {
    #[cfg(test)]
    pub fn new(value: f64) -> Self {
        Self::with_config(value, SpringConfig::DEFAULT)
    }

    pub fn with_config(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
            animating: false,
        }
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.value
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Jumps to `value` with no easing and no residual velocity.
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.animating = false;
    }

    /// Eases toward `target` over subsequent ticks.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
        self.animating = !self.at_rest();
    }

    /// Freezes at the current value.
    pub fn stop(&mut self) {
        self.target = self.value;
        self.velocity = 0.0;
        self.animating = false;
    }

    /// Advances the simulation by `dt_ms` milliseconds.
    ///
    /// Returns whether the spring is still moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.animating {
            return false;
        }

        let mut remaining = dt_ms.clamp(0.0, MAX_FRAME_MS);
        while remaining > 0.0 {
            let step = remaining.min(STEP_MS);
            let dt = step / 1000.0;
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * dt;
            self.value += self.velocity * dt;
            remaining -= step;
        }

        if self.at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            self.animating = false;
        }
        self.animating
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_VELOCITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while spring.tick(16.0) {
            frames += 1;
            assert!(frames < 1000, "spring never settled");
        }
        frames
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let mut spring = Spring::new(5.0);
        assert_eq!(spring.get(), 5.0);
        assert!(!spring.is_animating());
        assert!(!spring.tick(16.0));
    }

    #[test]
    fn test_set_immediate_skips_easing() {
        let mut spring = Spring::new(0.0);
        spring.set_immediate(40.0);
        assert_eq!(spring.get(), 40.0);
        assert_eq!(spring.target(), 40.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_converges_to_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        assert!(spring.is_animating());

        spring.tick(16.0);
        let first = spring.get();
        assert!(first > 0.0 && first < 100.0);

        let frames = settle(&mut spring);
        assert!(frames > 5);
        assert_eq!(spring.get(), 100.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_stiff_settles_faster() {
        let mut soft = Spring::with_config(0.0, SpringConfig::DEFAULT);
        let mut stiff = Spring::with_config(0.0, SpringConfig::STIFF);
        soft.set_target(1.0);
        stiff.set_target(1.0);
        assert!(settle(&mut stiff) < settle(&mut soft));
    }

    #[test]
    fn test_stop_freezes_value() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        spring.tick(50.0);
        let frozen = spring.get();

        spring.stop();
        assert!(!spring.is_animating());
        assert!(!spring.tick(16.0));
        assert_eq!(spring.get(), frozen);
        assert_eq!(spring.target(), frozen);
    }

    #[test]
    fn test_retarget_to_current_value_is_noop() {
        let mut spring = Spring::new(1.0);
        spring.set_target(1.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_long_frames_are_clipped() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        spring.tick(10_000.0);
        // At most MAX_FRAME_MS of motion was integrated
        assert!(spring.is_animating());
        assert!(spring.get() < 100.0);
    }
}
