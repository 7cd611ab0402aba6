use super::*;

#[test]
fn fade_blends_opacity() {
    let (out, inc) = TransitionKind::Fade.presentation(0.25);
    assert_eq!(out.opacity, 0.75);
    assert_eq!(inc.opacity, 0.25);
    assert_eq!(out.offset, Vec2::ZERO);
    assert_eq!(inc.offset, Vec2::ZERO);
}

#[test]
fn slide_from_right_pushes_outgoing_left() {
    let kind = TransitionKind::Slide {
        direction: SlideDirection::FromRight,
    };
    let (out, inc) = kind.presentation(0.0);
    assert_eq!(inc.offset, Vec2::new(1.0, 0.0));
    assert_eq!(out.offset.x, 0.0);

    let (out, inc) = kind.presentation(0.5);
    assert_eq!(inc.offset, Vec2::new(0.5, 0.0));
    assert_eq!(out.offset, Vec2::new(-0.5, 0.0));
    assert_eq!(inc.opacity, 1.0);

    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    assert_eq!(inc.offset_px(canvas), Vec2::new(960.0, 0.0));
}

#[test]
fn slide_from_bottom_moves_vertically() {
    let kind = TransitionKind::Slide {
        direction: SlideDirection::FromBottom,
    };
    let (out, inc) = kind.presentation(0.25);
    assert_eq!(inc.offset, Vec2::new(0.0, 0.75));
    assert_eq!(out.offset, Vec2::new(0.0, -0.25));
}

#[test]
fn wipe_reveals_incoming() {
    let kind = TransitionKind::Wipe {
        direction: SlideDirection::FromTop,
    };
    let (out, inc) = kind.presentation(0.4);
    assert_eq!(out, LayerComposite::identity());
    let reveal = inc.reveal.unwrap();
    assert_eq!(reveal.direction, SlideDirection::FromTop);
    assert_eq!(reveal.fraction, 0.4);
}

#[test]
fn cut_switches_halfway() {
    let (out, inc) = TransitionKind::None.presentation(0.49);
    assert_eq!((out.opacity, inc.opacity), (1.0, 0.0));
    let (out, inc) = TransitionKind::None.presentation(0.5);
    assert_eq!((out.opacity, inc.opacity), (0.0, 1.0));
}

#[test]
fn progress_is_clamped() {
    let (out, inc) = TransitionKind::Fade.presentation(3.0);
    assert_eq!((out.opacity, inc.opacity), (0.0, 1.0));
    let (out, inc) = TransitionKind::Fade.presentation(f64::NAN);
    assert_eq!((out.opacity, inc.opacity), (1.0, 0.0));
}

#[test]
fn parse_accepts_aliases() {
    assert_eq!(parse_transition("Fade").unwrap(), TransitionKind::Fade);
    assert_eq!(parse_transition("crossfade").unwrap(), TransitionKind::Fade);
    assert_eq!(
        parse_transition("slide-from-right").unwrap(),
        TransitionKind::Slide {
            direction: SlideDirection::FromRight
        }
    );
    assert_eq!(
        parse_transition("from-bottom").unwrap(),
        TransitionKind::Slide {
            direction: SlideDirection::FromBottom
        }
    );
    assert_eq!(
        parse_transition("wipe:rtl").unwrap(),
        TransitionKind::Wipe {
            direction: SlideDirection::FromRight
        }
    );
    assert_eq!(
        parse_transition("slide").unwrap(),
        TransitionKind::Slide {
            direction: SlideDirection::FromLeft
        }
    );
    assert_eq!(parse_transition("cut").unwrap(), TransitionKind::None);
}

#[test]
fn parse_rejects_unknown() {
    assert!(parse_transition("").is_err());
    assert!(parse_transition("zoom").is_err());
    assert!(parse_transition("slide-diagonal").is_err());
    assert!(parse_transition("fade-in").is_err());
}

#[test]
fn names_roundtrip_through_parse() {
    for kind in [
        TransitionKind::Fade,
        TransitionKind::None,
        TransitionKind::Slide {
            direction: SlideDirection::FromTop,
        },
        TransitionKind::Wipe {
            direction: SlideDirection::FromLeft,
        },
    ] {
        assert_eq!(parse_transition(&kind.name()).unwrap(), kind);
    }
}
