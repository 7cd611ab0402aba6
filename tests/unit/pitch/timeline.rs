use super::*;
use crate::{
    foundation::core::FrameIndex,
    foundation::error::PitchError,
    pitch::config::SceneDurations,
    timeline::model::ActivePosition,
};

#[test]
fn default_cut_is_1320_frames() {
    let tl = pitch_timeline(&PitchConfig::default()).unwrap();
    // 1410 frames of scenes minus six 15-frame overlaps.
    assert_eq!(tl.total_frames(), 1320);
    assert_eq!(tl.scenes().len(), 7);
    assert_eq!(tl.transitions().len(), 6);
    let ids: Vec<&str> = tl.scenes().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["title", "vision", "demo", "market", "tech", "architecture", "cta"]
    );
}

#[test]
fn scene_offsets_account_for_overlaps() {
    let tl = pitch_timeline(&PitchConfig::default()).unwrap();
    assert_eq!(tl.scene_offset(0), Some(FrameIndex(0)));
    assert_eq!(tl.scene_offset(1), Some(FrameIndex(105)));
    assert_eq!(tl.scene_offset(2), Some(FrameIndex(300)));
    assert_eq!(tl.scene_offset(6), Some(FrameIndex(1140)));
}

#[test]
fn slide_sits_between_vision_and_demo() {
    let tl = pitch_timeline(&PitchConfig::default()).unwrap();
    match tl.resolve(FrameIndex(300)).unwrap() {
        ActivePosition::InTransition {
            from_scene_id,
            to_scene_id,
            kind,
            from_local_frame,
            to_local_frame,
            ..
        } => {
            assert_eq!(from_scene_id, "vision");
            assert_eq!(to_scene_id, "demo");
            assert_eq!(kind, TRANSITIONS[1]);
            assert_eq!(from_local_frame, FrameIndex(195));
            assert_eq!(to_local_frame, FrameIndex(0));
        }
        other => panic!("expected a transition, got {other:?}"),
    }
}

#[test]
fn scene_shorter_than_its_transitions_is_rejected() {
    let cfg = PitchConfig {
        durations: SceneDurations {
            tech: 0.5,
            ..SceneDurations::default()
        },
        transition_frames: 10,
        ..PitchConfig::default()
    };
    let err = pitch_timeline(&cfg).unwrap_err();
    assert!(matches!(err, PitchError::Configuration(_)));
}
