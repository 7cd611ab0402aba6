//! Damped-spring progress curves.
//!
//! A spring is a unit mass-spring-damper (`m·x'' + c·x' + k·x = k`) released from rest at
//! `x = 0` and pulled toward the equilibrium `x = 1`. Positions come from the closed-form
//! solution evaluated at the elapsed time, so any frame can be sampled on its own, in any
//! order, with bit-identical results.
//!
//! Under-damped springs (`damping ratio < 1`) overshoot and ring around 1, a critically damped
//! spring is the fastest settle without overshoot, and over-damped springs creep toward 1 more
//! slowly the higher the damping. Once both displacement and velocity are bounded below the
//! rest threshold for all later time the spring reports exactly its target.

use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{PitchError, PitchResult},
};

/// Deviation from the target below which a spring counts as settled.
pub const DEFAULT_REST_THRESHOLD: f64 = 0.005;

// Upper bound for settle measurement, in seconds of simulated time.
const MAX_SETTLE_SECS: u64 = 600;

// Damping ratios this close to 1 use the critically damped solution.
const CRITICAL_EPSILON: f64 = 1e-6;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping coefficient `c`; must be finite and `>= 0`.
    pub damping: f64,
    /// Mass `m`; must be finite and `> 0`.
    pub mass: f64,
    /// Stiffness `k`; must be finite and `> 0`.
    pub stiffness: f64,
    /// Initial velocity in progress units per second.
    pub initial_velocity: f64,
    /// Stop at the target instead of overshooting it.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            initial_velocity: 0.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default mass/stiffness with the given damping.
    pub fn damped(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Reject parameters that cannot describe a physical spring.
    pub fn validate(&self) -> PitchResult<()> {
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(PitchError::animation(format!(
                "spring damping must be finite and >= 0, got {}",
                self.damping
            )));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(PitchError::animation(format!(
                "spring mass must be finite and > 0, got {}",
                self.mass
            )));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(PitchError::animation(format!(
                "spring stiffness must be finite and > 0, got {}",
                self.stiffness
            )));
        }
        if !self.initial_velocity.is_finite() {
            return Err(PitchError::animation(
                "spring initial_velocity must be finite",
            ));
        }
        Ok(())
    }

    /// Damping ratio `ζ = c / (2·sqrt(k·m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency `ω0 = sqrt(k/m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    // Progress toward 1 after `secs` seconds. Assumes a validated config.
    fn position(&self, secs: f64) -> f64 {
        if secs <= 0.0 {
            return 0.0;
        }
        let motion = self.motion(secs);
        if motion.at_rest(DEFAULT_REST_THRESHOLD) {
            return 1.0;
        }
        let x = 1.0 + motion.displacement;
        if self.overshoot_clamping { x.min(1.0) } else { x }
    }

    // Closed-form displacement from equilibrium, released at -1 with `initial_velocity`.
    fn motion(&self, secs: f64) -> Motion {
        let zeta = self.damping_ratio();
        let omega0 = self.natural_frequency();
        let v0 = self.initial_velocity;

        if zeta < 1.0 - CRITICAL_EPSILON {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let decay = -zeta * omega0;
            let envelope = (decay * secs).exp();
            let (c, s) = (-1.0_f64, (v0 + decay) / omega_d);
            // Velocity is v0·cos + (decay·s + omega_d)·sin under the same envelope.
            let q = decay * s + omega_d;
            let phase = omega_d * secs;
            Motion {
                displacement: envelope * (c * phase.cos() + s * phase.sin()),
                displacement_bound: envelope * c.hypot(s),
                velocity_bound: envelope * v0.hypot(q),
                omega0,
            }
        } else if zeta <= 1.0 + CRITICAL_EPSILON {
            let envelope = (-omega0 * secs).exp();
            let (c1, c2) = (-1.0, v0 - omega0);
            Motion {
                displacement: envelope * (c1 + c2 * secs),
                displacement_bound: linear_decay_bound(c1, c2, omega0, secs),
                velocity_bound: linear_decay_bound(v0, -omega0 * c2, omega0, secs),
                omega0,
            }
        } else {
            let fast = -omega0 * (zeta + (zeta * zeta - 1.0).sqrt());
            // r_slow·r_fast = omega0², which avoids cancellation for large ratios.
            let slow = omega0 * omega0 / fast;
            let c_slow = (v0 + fast) / (slow - fast);
            let c_fast = -1.0 - c_slow;
            let (e_slow, e_fast) = ((slow * secs).exp(), (fast * secs).exp());
            Motion {
                displacement: c_slow * e_slow + c_fast * e_fast,
                displacement_bound: c_slow.abs() * e_slow + c_fast.abs() * e_fast,
                velocity_bound: (c_slow * slow).abs() * e_slow + (c_fast * fast).abs() * e_fast,
                omega0,
            }
        }
    }
}

// Displacement at one instant plus bounds that hold for every later instant.
struct Motion {
    displacement: f64,
    displacement_bound: f64,
    velocity_bound: f64,
    omega0: f64,
}

impl Motion {
    // Velocity is compared in displacement units per radian of natural frequency.
    fn at_rest(&self, threshold: f64) -> bool {
        self.displacement_bound <= threshold && self.velocity_bound <= threshold * self.omega0
    }
}

// Largest value of `(|a| + |b|·s)·e^(-omega·s)` over `s >= t`.
fn linear_decay_bound(a: f64, b: f64, omega: f64, t: f64) -> f64 {
    let (a, b) = (a.abs(), b.abs());
    let peak = if b > 0.0 { 1.0 / omega - a / b } else { 0.0 };
    let s = t.max(peak);
    (a + b * s) * (-omega * s).exp()
}

/// A spring animation request: when it starts, where it goes and how long it may take.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Spring {
    /// Physical parameters.
    pub config: SpringConfig,
    /// Frames before the spring is released; the output is `from` until then.
    pub delay: u64,
    /// Output value at rest before release.
    pub from: f64,
    /// Output value at equilibrium.
    pub to: f64,
    /// Stretch or squeeze the natural settle time to exactly this many frames.
    pub duration_in_frames: Option<u64>,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            config: SpringConfig::default(),
            delay: 0,
            from: 0.0,
            to: 1.0,
            duration_in_frames: None,
        }
    }
}

impl Spring {
    /// A `0 -> 1` spring with the given configuration and no delay.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Delay the release by `frames`.
    pub fn delay(mut self, frames: u64) -> Self {
        self.delay = frames;
        self
    }

    /// Map progress onto `[from, to]` instead of `[0, 1]`.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Fix the settle duration.
    pub fn duration(mut self, frames: u64) -> Self {
        self.duration_in_frames = Some(frames);
        self
    }

    /// Sample the spring at `frame`.
    pub fn sample(&self, frame: FrameIndex, fps: Fps) -> PitchResult<f64> {
        self.config.validate()?;
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(PitchError::animation("spring from/to must be finite"));
        }
        if self.duration_in_frames == Some(0) {
            return Err(PitchError::animation(
                "spring duration_in_frames must be > 0 when set",
            ));
        }

        let Some(elapsed) = frame.0.checked_sub(self.delay).filter(|e| *e > 0) else {
            return Ok(self.from);
        };

        let mut elapsed_frames = elapsed as f64;
        if let Some(target) = self.duration_in_frames {
            let natural = measure_spring(fps, self.config, DEFAULT_REST_THRESHOLD)?;
            elapsed_frames *= natural as f64 / target as f64;
        }

        let progress = self
            .config
            .position(elapsed_frames * fps.frame_duration_secs());
        Ok(self.from + (self.to - self.from) * progress)
    }
}

/// Progress of a `0 -> 1` spring released at `delay`, sampled at `frame`.
///
/// Returns exactly `0.0` for every `frame <= delay`.
pub fn spring(frame: FrameIndex, fps: Fps, delay: u64, config: SpringConfig) -> PitchResult<f64> {
    Spring::new(config).delay(delay).sample(frame, fps)
}

/// Number of frames until the spring stays within `threshold` of its target.
///
/// Fails when the spring never settles (for example zero damping) within ten minutes of
/// simulated time.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> PitchResult<u64> {
    config.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(PitchError::animation(format!(
            "spring rest threshold must be finite and > 0, got {threshold}"
        )));
    }

    let fps_whole = fps.secs_to_frames_floor(1.0).max(1);
    let limit = fps_whole.saturating_mul(MAX_SETTLE_SECS);
    let dt = fps.frame_duration_secs();

    // A spring counts as settled once it has stayed inside the threshold for one second.
    let mut settled_since = 0u64;
    for frame in 0..=limit {
        let deviation = (1.0 - config.position(frame as f64 * dt)).abs();
        if deviation >= threshold {
            settled_since = frame + 1;
        } else if frame - settled_since >= fps_whole {
            return Ok(settled_since);
        }
    }

    Err(PitchError::animation(format!(
        "spring did not settle within {MAX_SETTLE_SECS}s (damping {})",
        config.damping
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
