use super::*;

fn clamp(x: f64) -> f64 {
    interpolate(x, &[0.0, 10.0], &[0.0, 1.0], InterpolateOpts::clamped()).unwrap()
}

#[test]
fn clamped_unit_ramp() {
    assert_eq!(clamp(-5.0), 0.0);
    assert_eq!(clamp(0.0), 0.0);
    assert_eq!(clamp(5.0), 0.5);
    assert_eq!(clamp(10.0), 1.0);
    assert_eq!(clamp(15.0), 1.0);
}

#[test]
fn extend_continues_outer_segments() {
    let opts = InterpolateOpts::extended();
    assert_eq!(interpolate(15.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(), 1.5);
    assert_eq!(interpolate(-5.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(), -0.5);
    // A short opacity ramp keeps climbing past its last breakpoint when not clamped.
    let v = interpolate(0.5, &[0.0, 0.1], &[0.0, 1.0], opts).unwrap();
    assert!((v - 5.0).abs() < 1e-12);
}

#[test]
fn mixed_policies_per_side() {
    let opts = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Identity,
        ease: Ease::Linear,
    };
    assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[5.0, 6.0], opts).unwrap(), 5.0);
    assert_eq!(interpolate(42.0, &[0.0, 1.0], &[5.0, 6.0], opts).unwrap(), 42.0);
}

#[test]
fn multi_segment_breakpoints() {
    let input = [0.0, 10.0, 20.0];
    let output = [0.0, 100.0, 50.0];
    let opts = InterpolateOpts::clamped();
    assert_eq!(interpolate(10.0, &input, &output, opts).unwrap(), 100.0);
    assert_eq!(interpolate(15.0, &input, &output, opts).unwrap(), 75.0);
    assert_eq!(interpolate(20.0, &input, &output, opts).unwrap(), 50.0);
    assert_eq!(interpolate(25.0, &input, &output, opts).unwrap(), 50.0);
}

#[test]
fn easing_applies_inside_segments_only() {
    let opts = InterpolateOpts::extended().with_ease(Ease::InQuad);
    assert_eq!(interpolate(5.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(), 0.25);
    assert_eq!(interpolate(20.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(), 2.0);
}

#[test]
fn rejects_malformed_ranges() {
    let opts = InterpolateOpts::clamped();
    let err = interpolate(0.0, &[0.0, 1.0], &[0.0], opts).unwrap_err();
    assert!(matches!(err, PitchError::InvalidRange(_)));
    assert!(interpolate(0.0, &[1.0, 0.0], &[0.0, 1.0], opts).is_err());
    assert!(interpolate(0.0, &[0.0, 0.0], &[0.0, 1.0], opts).is_err());
    assert!(interpolate(0.0, &[0.0], &[0.0], opts).is_err());
    assert!(interpolate(0.0, &[0.0, f64::NAN], &[0.0, 1.0], opts).is_err());
    assert!(interpolate(f64::NAN, &[0.0, 1.0], &[0.0, 1.0], opts).is_err());
}

#[test]
fn vector_and_color_outputs() {
    let out = [Vec2::new(0.0, 50.0), Vec2::new(100.0, 0.0)];
    let v = interpolate_value(0.5, &[0.0, 1.0], &out, InterpolateOpts::clamped()).unwrap();
    assert_eq!(v, Vec2::new(50.0, 25.0));

    let colors = [
        Rgba8Premul::from_hex_rgb(0x000000),
        Rgba8Premul::from_hex_rgb(0xFFFFFF),
    ];
    let c = interpolate_value(2.0, &[0.0, 1.0], &colors, InterpolateOpts::extended()).unwrap();
    assert_eq!(c, Rgba8Premul::from_hex_rgb(0xFFFFFF));

    let identity = InterpolateOpts {
        left: Extrapolate::Identity,
        ..InterpolateOpts::clamped()
    };
    assert!(interpolate_value(-1.0, &[0.0, 1.0], &out, identity).is_err());
}

#[test]
fn identical_inputs_give_bit_identical_outputs() {
    let opts = InterpolateOpts::extended().with_ease(Ease::InOutCubic);
    let a = interpolate(3.3, &[0.0, 7.0, 9.0], &[1.0, -2.0, 4.0], opts).unwrap();
    let b = interpolate(3.3, &[0.0, 7.0, 9.0], &[1.0, -2.0, 4.0], opts).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn transform_outputs_blend_every_component() {
    let start = Transform2D::default();
    let end = Transform2D {
        translate: Vec2::new(200.0, -40.0),
        rotation_rad: 1.0,
        scale: Vec2::new(2.0, 3.0),
        anchor: Vec2::new(10.0, 10.0),
    };
    let mid = interpolate_value(
        5.0,
        &[0.0, 10.0],
        &[start, end],
        InterpolateOpts::clamped(),
    )
    .unwrap();
    assert_eq!(mid.translate, Vec2::new(100.0, -20.0));
    assert_eq!(mid.rotation_rad, 0.5);
    assert_eq!(mid.scale, Vec2::new(1.5, 2.0));
    assert_eq!(mid.anchor, Vec2::new(5.0, 5.0));
}
