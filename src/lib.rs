//! pitchreel is the deterministic timeline and animation core of a scene-based pitch video.
//!
//! A [`Timeline`] is a sequence of [`Scene`]s joined by overlapping transitions. Every global
//! frame resolves to either a single scene or a transition between two neighbours, and each
//! active scene describes itself for its local frame as a [`VisualDescription`]. Rasterizing
//! and encoding are left to an external renderer.
//!
//! # Pipeline overview
//!
//! 1. **Build**: [`TimelineBuilder`] validates scene and transition timing into a [`Timeline`].
//! 2. **Resolve**: [`Timeline::resolve`] maps a global frame to an [`ActivePosition`].
//! 3. **Evaluate**: [`Evaluator::eval_frame`] renders the active scenes into an
//!    [`EvaluatedFrame`] with per-layer composite parameters.
//! 4. **Batch** (optional): [`eval_frames`] evaluates ranges in parallel and fingerprints
//!    identical frames.
//!
//! Scenes animate with [`interpolate`] and [`spring`], both pure functions of the frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same frame always produces the same output, on any thread.
//! - **No IO**: scenes are plain functions; nothing is read or written during evaluation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod eval;
mod foundation;
mod pitch;
mod timeline;
mod visual;

pub use animation::ease::Ease;
pub use animation::interpolate::{
    Extrapolate, InterpolateOpts, Lerp, interpolate, interpolate_clamped, interpolate_value,
};
pub use animation::spring::{
    DEFAULT_REST_THRESHOLD, Spring, SpringConfig, measure_spring, spring,
};
pub use effects::transitions::{
    LayerComposite, Reveal, SlideDirection, TransitionKind, parse_transition,
};
pub use eval::evaluator::{EvaluatedFrame, EvaluatedLayer, Evaluator};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use eval::pipeline::{EvalStats, EvalThreading, FrameOutput, eval_all, eval_frames};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameClock, FrameIndex, FrameRange, Rgba8Premul, Transform2D, Vec2,
};
pub use foundation::error::{PitchError, PitchResult};
pub use pitch::config::{PitchConfig, SceneDurations};
pub use pitch::palette::{COLORS, Colors, FONTS, Fonts, backdrop};
pub use pitch::scenes::{
    architecture_scene, cta_scene, demo_scene, market_scene, tech_scene, title_scene,
    vision_scene,
};
pub use pitch::timeline::{TRANSITIONS, pitch_timeline};
pub use timeline::dsl::TimelineBuilder;
pub use timeline::model::{ActivePosition, Scene, SceneSpec, Timeline, TransitionSpec};
pub use visual::model::{Background, Element, ElementKind, TextRole, VisualDescription};
