//! The seven scenes of the pitch video.
//!
//! Every scene is a plain function of `(local frame, fps)` and therefore implements
//! [`crate::Scene`] through the blanket impl. Timing constants are in frames.

mod architecture;
mod cta;
mod demo;
mod market;
mod tech;
mod title;
mod vision;

pub use architecture::architecture_scene;
pub use cta::cta_scene;
pub use demo::demo_scene;
pub use market::market_scene;
pub use tech::tech_scene;
pub use title::title_scene;
pub use vision::vision_scene;

use crate::{
    animation::interpolate::{InterpolateOpts, interpolate, interpolate_clamped},
    animation::spring::{SpringConfig, spring},
    foundation::core::{Fps, FrameIndex},
    foundation::error::PitchResult,
    pitch::palette::backdrop,
    visual::model::VisualDescription,
};

/// Soft, non-overshooting entrance; critically damped at the default mass and stiffness.
pub(crate) const SMOOTH: f64 = 20.0;
/// Bouncy entrance with visible overshoot.
pub(crate) const BOUNCY: f64 = 12.0;

/// Clamped 0..1 ramp over `[start, end]`.
pub(crate) fn fade_window(local: FrameIndex, start: f64, end: f64) -> PitchResult<f64> {
    interpolate_clamped(local.0 as f64, &[start, end], &[0.0, 1.0])
}

/// Spring from 0 to 1 starting `delay` frames into the scene.
pub(crate) fn entrance(local: FrameIndex, fps: Fps, delay: u64, damping: f64) -> PitchResult<f64> {
    spring(local, fps, delay, SpringConfig::damped(damping))
}

/// Map a 0..1 driver onto `[from, to]`, extending past the ends so overshoot carries through.
pub(crate) fn remap(driver: f64, from: f64, to: f64) -> PitchResult<f64> {
    interpolate(driver, &[0.0, 1.0], &[from, to], InterpolateOpts::extended())
}

/// Text cursor blinks at one cycle per 30 frames.
pub(crate) fn cursor_visible(local: FrameIndex) -> bool {
    local.0 % 30 < 15
}

pub(crate) fn canvas_for(scene_id: &str) -> VisualDescription {
    VisualDescription::new(scene_id, backdrop())
}

#[cfg(test)]
#[path = "../../../tests/unit/pitch/scenes/mod.rs"]
mod tests;
