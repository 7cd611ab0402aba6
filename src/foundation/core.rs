use crate::foundation::error::{PitchError, PitchResult};

pub use kurbo::{Affine, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Zero-based frame index.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Half-open frame interval `[start, end)`.
pub struct FrameRange {
    /// Inclusive start frame.
    pub start: FrameIndex,
    /// Exclusive end frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a validated frame range.
    pub fn new(start: FrameIndex, end: FrameIndex) -> PitchResult<Self> {
        if start.0 > end.0 {
            return Err(PitchError::configuration("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered by the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Returns `true` when the range has zero length.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Returns `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frames-per-second value.
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated rational FPS value.
    pub fn new(num: u32, den: u32) -> PitchResult<Self> {
        if den == 0 {
            return Err(PitchError::configuration("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(PitchError::configuration("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Build an integral frame rate such as `30` fps.
    pub fn whole(num: u32) -> PitchResult<Self> {
        Self::new(num, 1)
    }

    /// Convert to floating-point frames-per-second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert whole seconds to a frame count, rounding down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The per-frame clock handed in by the external rendering driver.
pub struct FrameClock {
    /// Global frame index, starting at 0.
    pub frame: FrameIndex,
    /// Fixed playback rate.
    pub fps: Fps,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas size in pixels.
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex_rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 255,
        }
    }

    /// Convert straight-alpha RGBA into premultiplied RGBA.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Scale every channel by `alpha / 255`, i.e. apply extra translucency.
    pub const fn fade(self, alpha: u8) -> Self {
        const fn mul(c: u8, a: u8) -> u8 {
            (((c as u16 * a as u16) + 127) / 255) as u8
        }

        Self {
            r: mul(self.r, alpha),
            g: mul(self.g, alpha),
            b: mul(self.b, alpha),
            a: mul(self.a, alpha),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Decomposed 2D transform parameters.
pub struct Transform2D {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Non-uniform scale. Default is `(1, 1)`.
    pub scale: Vec2,
    /// Pivot in local space.
    pub anchor: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    /// Pure translation.
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Pure uniform scale.
    pub fn uniform_scale(s: f64) -> Self {
        Self {
            scale: Vec2::new(s, s),
            ..Self::default()
        }
    }

    /// Convert decomposed parameters into an affine matrix.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_anchor = Affine::translate(self.anchor);
        let t_unanchor = Affine::translate(-self.anchor);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
