use super::*;

#[test]
fn defaults_match_the_pitch_cut() {
    let cfg = PitchConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.fps.as_f64(), 30.0);
    assert_eq!(cfg.transition_frames, 15);
    let frames: Vec<u64> = cfg
        .durations
        .in_order()
        .iter()
        .map(|(_, s)| cfg.frames_for(*s))
        .collect();
    assert_eq!(frames, vec![120, 210, 300, 210, 180, 210, 180]);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let json = r#"{ "transition_frames": 10, "durations": { "demo": 12 } }"#;
    let cfg = PitchConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.transition_frames, 10);
    assert_eq!(cfg.durations.demo, 12.0);
    assert_eq!(cfg.durations.title, 4.0);
    assert_eq!(cfg.canvas.width, 1920);
}

#[test]
fn json_roundtrip_preserves_values() {
    let cfg = PitchConfig {
        transition_frames: 9,
        ..PitchConfig::default()
    };
    let back = PitchConfig::from_json_str(&cfg.to_json_string().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PitchConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, PitchError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn validate_rejects_bad_values() {
    let zero_fps = PitchConfig {
        fps: Fps { num: 0, den: 1 },
        ..PitchConfig::default()
    };
    assert!(matches!(zero_fps.validate(), Err(PitchError::Configuration(_))));

    let mut negative = PitchConfig::default();
    negative.durations.market = -1.0;
    let err = negative.validate().unwrap_err();
    assert!(err.to_string().contains("'market'"));

    let mut tiny = PitchConfig::default();
    tiny.durations.cta = 0.001;
    assert!(tiny.validate().is_err());

    let flat = PitchConfig {
        canvas: Canvas {
            width: 1920,
            height: 0,
        },
        ..PitchConfig::default()
    };
    assert!(flat.validate().is_err());
}
