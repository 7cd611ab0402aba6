use super::*;
use crate::visual::model::ElementKind;

fn at(frame: u64) -> VisualDescription {
    architecture_scene(FrameIndex(frame), Fps::new(30, 1).unwrap()).unwrap()
}

#[test]
fn input_box_pops_after_delay() {
    assert_eq!(at(10).element("input").unwrap().transform.scale.x, 0.0);
    assert!(at(20).element("input").unwrap().transform.scale.x > 0.0);
}

#[test]
fn arrows_fade_over_ten_frames() {
    assert_eq!(at(35).element("arrow_input").unwrap().opacity, 0.5);
    assert_eq!(at(80).element("arrow_nlp").unwrap().opacity, 0.5);
    assert_eq!(at(125).element("arrow_runtime").unwrap().opacity, 1.0);
}

#[test]
fn stages_inherit_the_interpreter_fade() {
    let desc = at(50);
    assert_eq!(desc.element("interpreter").unwrap().opacity, 0.5);
    let nlp = desc.element("nlp").unwrap();
    assert_eq!(nlp.opacity, 0.5);
    assert_eq!(nlp.transform.scale.x, 0.0);
}

#[test]
fn runtime_and_roadmap_follow() {
    assert_eq!(at(135).element("runtime").unwrap().opacity, 0.5);
    let desc = at(160);
    assert_eq!(desc.element("phase_1_title").unwrap().opacity, 0.5);
    let stroke = |id: &str| match desc.element(id).unwrap().kind {
        ElementKind::Panel { stroke, .. } => stroke,
        _ => unreachable!(),
    };
    assert_eq!(stroke("phase_0"), Some(COLORS.accent));
    assert_eq!(stroke("phase_2"), Some(COLORS.bg_card));
}
