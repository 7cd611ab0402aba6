use super::*;
use crate::{
    animation::interpolate::interpolate_clamped,
    eval::evaluator::Evaluator,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::PitchResult,
    timeline::{dsl::TimelineBuilder, model::Timeline, model::TransitionSpec},
    visual::model::VisualDescription,
};

// Fades in over ten frames, then holds still.
fn settle(local: FrameIndex, _fps: Fps) -> PitchResult<VisualDescription> {
    let mut desc = VisualDescription::new(
        "settle",
        Background::LinearGradient {
            angle_deg: 135.0,
            from: Rgba8Premul::from_hex_rgb(0x0F0F23),
            to: Rgba8Premul::from_hex_rgb(0x1E1E3F),
        },
    );
    let opacity = interpolate_clamped(local.0 as f64, &[0.0, 10.0], &[0.0, 1.0])?;
    desc.push(
        Element::text(
            "title",
            "Splash",
            TextRole::Title,
            Rgba8Premul::from_hex_rgb(0xFFFFFF),
        )
        .opacity(opacity),
    );
    Ok(desc)
}

fn timeline() -> Timeline {
    TimelineBuilder::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 320,
            height: 180,
        },
    )
    .scene("a", 30, settle)
    .transition(TransitionSpec::fade(6))
    .scene("b", 30, settle)
    .build()
    .unwrap()
}

fn fp(tl: &Timeline, f: u64) -> FrameFingerprint {
    fingerprint_frame(&Evaluator::eval_frame(tl, FrameIndex(f)).unwrap())
}

#[test]
fn static_frames_share_a_fingerprint() {
    let tl = timeline();
    assert_eq!(fp(&tl, 12), fp(&tl, 13));
    assert_eq!(fp(&tl, 10), fp(&tl, 23));
}

#[test]
fn animated_frames_differ() {
    let tl = timeline();
    assert_ne!(fp(&tl, 3), fp(&tl, 4));
    assert_ne!(fp(&tl, 24), fp(&tl, 25));
    assert_ne!(fp(&tl, 23), fp(&tl, 24));
}

#[test]
fn fingerprint_is_stable_across_calls() {
    let tl = timeline();
    let frame = Evaluator::eval_frame(&tl, FrameIndex(26)).unwrap();
    assert_eq!(fingerprint_frame(&frame), fingerprint_frame(&frame.clone()));
}
