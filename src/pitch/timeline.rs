use crate::{
    effects::transitions::{SlideDirection, TransitionKind},
    foundation::error::PitchResult,
    pitch::config::PitchConfig,
    pitch::scenes::{
        architecture_scene, cta_scene, demo_scene, market_scene, tech_scene, title_scene,
        vision_scene,
    },
    timeline::{dsl::TimelineBuilder, model::Timeline, model::TransitionSpec},
};

/// Blends between consecutive scenes, in playback order.
pub const TRANSITIONS: [TransitionKind; 6] = [
    TransitionKind::Fade,
    TransitionKind::Slide {
        direction: SlideDirection::FromRight,
    },
    TransitionKind::Fade,
    TransitionKind::Slide {
        direction: SlideDirection::FromBottom,
    },
    TransitionKind::Fade,
    TransitionKind::Fade,
];

/// Assemble the seven-scene pitch timeline.
#[tracing::instrument(skip(cfg))]
pub fn pitch_timeline(cfg: &PitchConfig) -> PitchResult<Timeline> {
    cfg.validate()?;
    let d = &cfg.durations;
    let tr = |i: usize| TransitionSpec::new(TRANSITIONS[i], cfg.transition_frames);

    TimelineBuilder::new(cfg.fps, cfg.canvas)
        .scene("title", cfg.frames_for(d.title), title_scene)
        .transition(tr(0))
        .scene("vision", cfg.frames_for(d.vision), vision_scene)
        .transition(tr(1))
        .scene("demo", cfg.frames_for(d.demo), demo_scene)
        .transition(tr(2))
        .scene("market", cfg.frames_for(d.market), market_scene)
        .transition(tr(3))
        .scene("tech", cfg.frames_for(d.tech), tech_scene)
        .transition(tr(4))
        .scene("architecture", cfg.frames_for(d.architecture), architecture_scene)
        .transition(tr(5))
        .scene("cta", cfg.frames_for(d.cta), cta_scene)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/pitch/timeline.rs"]
mod tests;
