use super::*;

fn at(frame: u64) -> VisualDescription {
    title_scene(FrameIndex(frame), Fps::new(30, 1).unwrap()).unwrap()
}

#[test]
fn everything_starts_hidden() {
    let desc = at(0);
    assert_eq!(desc.scene_id, "title");
    assert_eq!(desc.element("logo").unwrap().transform.scale, Vec2::new(0.0, 0.0));
    let title = desc.element("title").unwrap();
    assert_eq!(title.opacity, 0.0);
    assert_eq!(title.transform.translate.y, 50.0);
    assert_eq!(desc.element("subtitle").unwrap().opacity, 0.0);
    assert_eq!(desc.element("tag_2").unwrap().opacity, 0.0);
}

#[test]
fn subtitle_fades_before_tagline() {
    let desc = at(40);
    assert_eq!(desc.element("subtitle").unwrap().opacity, 0.5);
    assert_eq!(desc.element("tagline").unwrap().opacity, 0.0);

    let desc = at(60);
    assert_eq!(desc.element("subtitle").unwrap().opacity, 1.0);
    assert_eq!(desc.element("tagline").unwrap().opacity, 0.5);
    assert_eq!(desc.element("tag_0").unwrap().opacity, 0.5);
}

#[test]
fn title_settles_into_place() {
    let title = at(119).element("title").unwrap().clone();
    assert!(title.opacity > 0.999);
    assert!(title.transform.translate.y.abs() < 0.05);
}

#[test]
fn logo_bounces_past_full_size() {
    let peak = (0..60)
        .map(|f| at(f).element("logo").unwrap().transform.scale.x)
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05, "peak {peak}");
}
