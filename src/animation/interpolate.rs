//! Piecewise-linear interpolation through breakpoints with per-side extrapolation.

use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8Premul, Transform2D, Vec2},
    foundation::error::{PitchError, PitchResult},
};

/// Values that can be blended linearly. `t` may leave `[0, 1]` when extrapolating.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (f64::from(*a) + (f64::from(*b) - f64::from(*a)) * t) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        *a + (*b - *a) * t
    }
}

impl Lerp for Transform2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            rotation_rad: f64::lerp(&a.rotation_rad, &b.rotation_rad, t),
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
            anchor: <Vec2 as Lerp>::lerp(&a.anchor, &b.anchor, t),
        }
    }
}

impl Lerp for Rgba8Premul {
    // Channels saturate at the u8 bounds when extrapolated.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            f64::lerp(&f64::from(a), &f64::from(b), t)
                .round()
                .clamp(0.0, 255.0) as u8
        }

        Self {
            r: channel(a.r, b.r, t),
            g: channel(a.g, b.g, t),
            b: channel(a.b, b.b, t),
            a: channel(a.a, b.a, t),
        }
    }
}

/// Behaviour for inputs outside the first or last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest endpoint output.
    Clamp,
    /// Continue the outermost segment linearly.
    #[default]
    Extend,
    /// Return the input unchanged (scalar outputs only).
    Identity,
}

/// Options for [`interpolate`] and [`interpolate_value`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Policy below the first breakpoint.
    pub left: Extrapolate,
    /// Policy above the last breakpoint.
    pub right: Extrapolate,
    /// Curve applied to the ratio within each segment. Extrapolated regions stay linear.
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Extend on both sides (the default).
    pub fn extended() -> Self {
        Self::default()
    }

    /// Replace the segment easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Inside,
    Right,
}

#[derive(Clone, Copy, Debug)]
struct Located {
    segment: usize,
    t: f64,
    side: Side,
}

fn validate_ranges(input: f64, input_range: &[f64], output_len: usize) -> PitchResult<()> {
    if input_range.len() < 2 {
        return Err(PitchError::invalid_range(format!(
            "input range needs at least 2 breakpoints, got {}",
            input_range.len()
        )));
    }
    if input_range.len() != output_len {
        return Err(PitchError::invalid_range(format!(
            "input range has {} breakpoints but output range has {}",
            input_range.len(),
            output_len
        )));
    }
    if let Some(bad) = input_range.iter().find(|x| !x.is_finite()) {
        return Err(PitchError::invalid_range(format!(
            "input range contains non-finite breakpoint {bad}"
        )));
    }
    if let Some(i) = input_range.windows(2).position(|w| w[0] >= w[1]) {
        return Err(PitchError::invalid_range(format!(
            "input range must be strictly increasing ({} at index {i} is not < {})",
            input_range[i],
            input_range[i + 1]
        )));
    }
    if !input.is_finite() {
        return Err(PitchError::invalid_range(format!(
            "cannot interpolate non-finite input {input}"
        )));
    }
    Ok(())
}

fn locate(input: f64, input_range: &[f64]) -> Located {
    let last = input_range.len() - 1;
    let (segment, side) = if input < input_range[0] {
        (0, Side::Left)
    } else if input > input_range[last] {
        (last - 1, Side::Right)
    } else {
        let idx = input_range.partition_point(|x| *x <= input);
        (idx.saturating_sub(1).min(last - 1), Side::Inside)
    };
    let a = input_range[segment];
    let b = input_range[segment + 1];
    Located {
        segment,
        t: (input - a) / (b - a),
        side,
    }
}

/// Interpolate `input` through `input_range -> output_range` for any [`Lerp`] value.
///
/// Fails with [`PitchError::InvalidRange`] when the ranges differ in length, have fewer than
/// two breakpoints, the input range is not strictly increasing, or when
/// [`Extrapolate::Identity`] would be needed (it only makes sense for scalars, see
/// [`interpolate`]).
pub fn interpolate_value<T>(
    input: f64,
    input_range: &[f64],
    output_range: &[T],
    opts: InterpolateOpts,
) -> PitchResult<T>
where
    T: Lerp + Clone,
{
    validate_ranges(input, input_range, output_range.len())?;
    let loc = locate(input, input_range);
    let a = &output_range[loc.segment];
    let b = &output_range[loc.segment + 1];

    let policy = match loc.side {
        Side::Inside => return Ok(T::lerp(a, b, opts.ease.apply(loc.t))),
        Side::Left => opts.left,
        Side::Right => opts.right,
    };
    match (policy, loc.side) {
        (Extrapolate::Clamp, Side::Left) => Ok(a.clone()),
        (Extrapolate::Clamp, _) => Ok(b.clone()),
        (Extrapolate::Extend, _) => Ok(T::lerp(a, b, loc.t)),
        (Extrapolate::Identity, _) => Err(PitchError::invalid_range(
            "identity extrapolation is only defined for scalar outputs",
        )),
    }
}

/// Scalar interpolation, the workhorse behind every fade, slide and fill in the scenes.
///
/// ```
/// use pitchreel::{InterpolateOpts, interpolate};
///
/// let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 1.0], InterpolateOpts::clamped()).unwrap();
/// assert_eq!(v, 0.5);
/// ```
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> PitchResult<f64> {
    validate_ranges(input, input_range, output_range.len())?;
    let last = input_range.len() - 1;
    let identity_left = opts.left == Extrapolate::Identity && input < input_range[0];
    let identity_right = opts.right == Extrapolate::Identity && input > input_range[last];
    if identity_left || identity_right {
        return Ok(input);
    }
    interpolate_value(input, input_range, output_range, opts)
}

/// [`interpolate`] with clamping on both sides, the common case for fade windows.
pub fn interpolate_clamped(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
) -> PitchResult<f64> {
    interpolate(input, input_range, output_range, InterpolateOpts::clamped())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
