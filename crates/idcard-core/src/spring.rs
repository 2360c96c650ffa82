//! Damped harmonic oscillator used for every animated value of the card.
//!
//! Each axis owns one [`Spring`]; the controller never writes `value` or
//! `velocity` directly, it only moves `target` and calls [`Spring::tick`].

use crate::constants::{
    CARD_SPRING_DAMPING, CARD_SPRING_MASS, CARD_SPRING_STIFFNESS, MAX_TICK_STEP_SEC,
    SPRING_REST_EPSILON,
};

const MAX_SUB_STEPS: u32 = 1024;

/// Physical constants shared by a group of springs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            damping: CARD_SPRING_DAMPING,
            stiffness: CARD_SPRING_STIFFNESS,
            mass: CARD_SPRING_MASS,
        }
    }
}

impl SpringParams {
    pub const fn new(damping: f32, stiffness: f32, mass: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }

    /// Longest step the explicit integrator stays stable with.
    pub fn max_step(&self) -> f32 {
        let mut step = MAX_TICK_STEP_SEC;
        let mass = self.mass.max(f32::EPSILON);
        if self.damping > 0.0 {
            step = step.min(0.5 * mass / self.damping);
        }
        if self.stiffness > 0.0 {
            step = step.min(0.5 / (self.stiffness / mass).sqrt());
        }
        step
    }

    /// Damping ratio ζ; 1.0 is critical, below 1.0 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    resting: bool,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Spring {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            resting: true,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.resting
    }

    /// Move the target. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.resting = false;
    }

    /// Jump to `value` with zero velocity (mount/reset only).
    pub fn snap(&mut self, value: f32) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.resting = true;
    }

    /// Advance by `dt` seconds using semi-implicit Euler.
    ///
    /// The real elapsed time is integrated in equal sub-steps no longer than
    /// [`SpringParams::max_step`], so a late frame catches up without
    /// diverging. Past [`MAX_SUB_STEPS`] the spring has long settled and
    /// simply lands on its target.
    pub fn tick(&mut self, params: &SpringParams, dt: f32) {
        if self.resting || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let max_step = params.max_step();
        let wanted = (dt / max_step).ceil().max(1.0);
        let steps = wanted.min(MAX_SUB_STEPS as f32) as u32;
        let h = if wanted > MAX_SUB_STEPS as f32 {
            max_step
        } else {
            dt / steps as f32
        };
        for _ in 0..steps {
            self.step(params, h);
            if self.settle() {
                return;
            }
        }
        if wanted > MAX_SUB_STEPS as f32 {
            self.snap(self.target);
        }
    }

    fn step(&mut self, params: &SpringParams, h: f32) {
        let mass = params.mass.max(f32::EPSILON);
        let accel =
            (params.stiffness * (self.target - self.value) - params.damping * self.velocity) / mass;
        self.velocity += accel * h;
        self.value += self.velocity * h;
        if !self.value.is_finite() || !self.velocity.is_finite() {
            // Only reachable with absurd params; fall back to the target.
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn settle(&mut self) -> bool {
        if (self.target - self.value).abs() < SPRING_REST_EPSILON
            && self.velocity.abs() < SPRING_REST_EPSILON
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.resting = true;
        }
        self.resting
    }
}
