use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn heavy(frame: u64) -> f64 {
    spring(FrameIndex(frame), fps30(), 10, SpringConfig::damped(200.0)).unwrap()
}

#[test]
fn zero_before_and_at_delay() {
    assert_eq!(heavy(0), 0.0);
    assert_eq!(heavy(5), 0.0);
    assert_eq!(heavy(10), 0.0);
    assert!(heavy(11) > 0.0);
}

#[test]
fn heavy_damping_is_monotonic_and_settles() {
    let mut prev = 0.0;
    for f in 0..600 {
        let v = heavy(f);
        assert!(v >= prev, "frame {f}: {v} < {prev}");
        assert!(v <= 1.02, "frame {f}: overshoot {v}");
        prev = v;
    }
    assert!((heavy(600) - 1.0).abs() < 1e-6);
}

#[test]
fn light_damping_overshoots_then_converges() {
    let config = SpringConfig::damped(12.0);
    let samples: Vec<f64> = (0..300)
        .map(|f| spring(FrameIndex(f), fps30(), 0, config).unwrap())
        .collect();
    let peak = samples.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak > 1.05, "expected visible overshoot, peak was {peak}");
    assert!((samples[299] - 1.0).abs() < 1e-3);
}

#[test]
fn overshoot_clamping_caps_at_target() {
    let config = SpringConfig {
        overshoot_clamping: true,
        ..SpringConfig::damped(8.0)
    };
    for f in 0..120 {
        assert!(spring(FrameIndex(f), fps30(), 0, config).unwrap() <= 1.0);
    }
}

#[test]
fn from_to_maps_progress() {
    let s = Spring::new(SpringConfig::damped(20.0))
        .delay(4)
        .range(50.0, 0.0);
    assert_eq!(s.sample(FrameIndex(0), fps30()).unwrap(), 50.0);
    assert_eq!(s.sample(FrameIndex(200), fps30()).unwrap(), 0.0);
}

#[test]
fn duration_stretches_natural_settle_time() {
    let config = SpringConfig::damped(200.0);
    let natural = measure_spring(fps30(), config, DEFAULT_REST_THRESHOLD).unwrap();
    assert!(natural > 0);

    let stretched = Spring::new(config).duration(natural * 2);
    let plain = Spring::new(config);
    let a = stretched.sample(FrameIndex(natural * 2), fps30()).unwrap();
    let b = plain.sample(FrameIndex(natural), fps30()).unwrap();
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn measure_spring_orders_by_damping() {
    let critical = measure_spring(fps30(), SpringConfig::damped(20.0), 0.005).unwrap();
    let wobbly = measure_spring(fps30(), SpringConfig::damped(3.0), 0.005).unwrap();
    assert!(wobbly > critical, "{wobbly} <= {critical}");
}

#[test]
fn undamped_spring_never_settles() {
    assert!(measure_spring(fps30(), SpringConfig::damped(0.0), 0.005).is_err());
    assert!(
        Spring::new(SpringConfig::damped(0.0))
            .duration(30)
            .sample(FrameIndex(5), fps30())
            .is_err()
    );
}

#[test]
fn rejects_malformed_config() {
    for config in [
        SpringConfig::damped(-1.0),
        SpringConfig::damped(f64::NAN),
        SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            stiffness: -5.0,
            ..SpringConfig::default()
        },
    ] {
        let err = spring(FrameIndex(3), fps30(), 0, config).unwrap_err();
        assert!(matches!(err, PitchError::Animation(_)), "{config:?}");
    }
    assert!(
        Spring::new(SpringConfig::default())
            .duration(0)
            .sample(FrameIndex(1), fps30())
            .is_err()
    );
}

#[test]
fn reverse_order_evaluation_matches_forward() {
    let config = SpringConfig::damped(12.0);
    let forward: Vec<u64> = (0..90)
        .map(|f| spring(FrameIndex(f), fps30(), 7, config).unwrap().to_bits())
        .collect();
    let mut backward: Vec<u64> = (0..90)
        .rev()
        .map(|f| spring(FrameIndex(f), fps30(), 7, config).unwrap().to_bits())
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn settled_springs_land_exactly_on_target() {
    for damping in [8.0, 12.0, 20.0, 200.0] {
        let config = SpringConfig::damped(damping);
        let natural = measure_spring(fps30(), config, DEFAULT_REST_THRESHOLD).unwrap();
        let late = spring(FrameIndex(110 + natural + 60), fps30(), 110, config).unwrap();
        assert_eq!(late, 1.0, "damping {damping}");
    }
    // Three seconds after release a critically damped spring is at rest.
    assert_eq!(spring(FrameIndex(200), fps30(), 110, SpringConfig::damped(20.0)).unwrap(), 1.0);
    assert!(spring(FrameIndex(115), fps30(), 110, SpringConfig::damped(20.0)).unwrap() < 1.0);
}

#[test]
fn damping_above_critical_keeps_slowing_the_spring() {
    let curve = |damping: f64| -> Vec<u64> {
        (1..120)
            .map(|f| {
                spring(FrameIndex(f), fps30(), 0, SpringConfig::damped(damping))
                    .unwrap()
                    .to_bits()
            })
            .collect()
    };
    assert_ne!(curve(20.0), curve(200.0));
    assert_ne!(curve(200.0), curve(2000.0));

    let at_one_second = |damping: f64| {
        spring(FrameIndex(30), fps30(), 0, SpringConfig::damped(damping)).unwrap()
    };
    assert!(at_one_second(20.0) > at_one_second(200.0));
    assert!(at_one_second(200.0) > at_one_second(2000.0));

    let settle = |damping: f64| {
        measure_spring(fps30(), SpringConfig::damped(damping), DEFAULT_REST_THRESHOLD).unwrap()
    };
    assert!(settle(20.0) < settle(200.0));
}

#[test]
fn closed_form_solves_the_equation_of_motion() {
    // m·x'' + c·x' + k·x = k, checked with central differences in every damping regime.
    let h = 1e-4;
    for config in [
        SpringConfig::damped(5.0),
        SpringConfig::damped(20.0),
        SpringConfig::damped(200.0),
        SpringConfig {
            initial_velocity: 3.0,
            ..SpringConfig::damped(60.0)
        },
    ] {
        for t in [0.1, 0.25, 0.5] {
            let (prev, x, next) = (
                config.position(t - h),
                config.position(t),
                config.position(t + h),
            );
            let accel = (next - 2.0 * x + prev) / (h * h);
            let vel = (next - prev) / (2.0 * h);
            let residual = config.mass * accel + config.damping * vel + config.stiffness * x
                - config.stiffness;
            assert!(residual.abs() < 1e-2, "{config:?} at {t}s: residual {residual}");
        }
    }
}
