use super::*;

fn at(frame: u64) -> VisualDescription {
    cta_scene(FrameIndex(frame), Fps::new(30, 1).unwrap()).unwrap()
}

#[test]
fn glow_pulses_between_bounds() {
    assert!((glow_intensity(FrameIndex(0)).unwrap() - 0.45).abs() < 1e-12);
    for f in 0..200 {
        let g = glow_intensity(FrameIndex(f)).unwrap();
        assert!((0.3..=0.6).contains(&g), "frame {f}: {g}");
    }
    assert_ne!(
        glow_intensity(FrameIndex(5)).unwrap(),
        glow_intensity(FrameIndex(20)).unwrap()
    );
}

#[test]
fn quote_then_slogan_then_links() {
    let desc = at(30);
    assert_eq!(desc.element("quote").unwrap().opacity, 0.0);
    assert_eq!(desc.element("slogan").unwrap().opacity, 0.0);

    let desc = at(70);
    assert!(desc.element("quote").unwrap().opacity > 0.99);
    assert_eq!(desc.element("slogan").unwrap().opacity, 0.5);
    assert_eq!(desc.element("link_0").unwrap().opacity, 0.0);

    assert_eq!(at(110).element("link_1").unwrap().opacity, 0.5);
}
