use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{PitchError, PitchResult},
};

/// Scene lengths in seconds, converted to frames at the configured rate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneDurations {
    /// Logo and product name.
    pub title: f64,
    /// Problem and solution.
    pub vision: f64,
    /// Typed command demo.
    pub demo: f64,
    /// Market bars.
    pub market: f64,
    /// Comparison table.
    pub tech: f64,
    /// Layered architecture diagram.
    pub architecture: f64,
    /// Closing quote and links.
    pub cta: f64,
}

impl Default for SceneDurations {
    fn default() -> Self {
        Self {
            title: 4.0,
            vision: 7.0,
            demo: 10.0,
            market: 7.0,
            tech: 6.0,
            architecture: 7.0,
            cta: 6.0,
        }
    }
}

impl SceneDurations {
    /// `(scene id, seconds)` in playback order.
    pub fn in_order(&self) -> [(&'static str, f64); 7] {
        [
            ("title", self.title),
            ("vision", self.vision),
            ("demo", self.demo),
            ("market", self.market),
            ("tech", self.tech),
            ("architecture", self.architecture),
            ("cta", self.cta),
        ]
    }
}

/// Top-level knobs for the pitch video.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PitchConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Length of every scene transition in frames.
    pub transition_frames: u64,
    /// Per-scene lengths.
    pub durations: SceneDurations,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            transition_frames: 15,
            durations: SceneDurations::default(),
        }
    }
}

impl PitchConfig {
    /// Check value ranges. Timing consistency between scenes and transitions is checked later
    /// when the timeline is built.
    pub fn validate(&self) -> PitchResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PitchError::configuration("canvas width/height must be > 0"));
        }
        if self.transition_frames == 0 {
            return Err(PitchError::configuration("transition_frames must be > 0"));
        }
        for (id, secs) in self.durations.in_order() {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(PitchError::configuration(format!(
                    "scene '{id}' duration must be a positive number of seconds, got {secs}"
                )));
            }
            if self.frames_for(secs) == 0 {
                return Err(PitchError::configuration(format!(
                    "scene '{id}' duration {secs}s is shorter than one frame"
                )));
            }
        }
        Ok(())
    }

    /// Seconds to whole frames at the configured rate, rounded to nearest.
    pub fn frames_for(&self, secs: f64) -> u64 {
        (secs * self.fps.as_f64()).round().max(0.0) as u64
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> PitchResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| PitchError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> PitchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PitchError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pitch/config.rs"]
mod tests;
