use crate::foundation::error::{PitchError, PitchResult};

/// Easing curve applied to a normalized `[0, 1]` ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity curve.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Sinusoidal ease-in-out.
    InOutSine,
}

impl Ease {
    /// Every easing variant, in declaration order.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InOutSine,
    ];

    /// Apply the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Parse a curve name such as `"out_cubic"` or `"in-out-quad"`.
    pub fn parse(name: &str) -> PitchResult<Self> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "linear" => Ok(Self::Linear),
            "in_quad" => Ok(Self::InQuad),
            "out_quad" => Ok(Self::OutQuad),
            "in_out_quad" => Ok(Self::InOutQuad),
            "in_cubic" => Ok(Self::InCubic),
            "out_cubic" => Ok(Self::OutCubic),
            "in_out_cubic" => Ok(Self::InOutCubic),
            "in_out_sine" => Ok(Self::InOutSine),
            _ => Err(PitchError::animation(format!("unknown ease '{name}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
