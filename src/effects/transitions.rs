use crate::{
    foundation::core::{Canvas, Vec2},
    foundation::error::{PitchError, PitchResult},
};

/// Edge an incoming scene enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Enter from the left edge, moving right.
    FromLeft,
    /// Enter from the right edge, moving left.
    FromRight,
    /// Enter from the top edge, moving down.
    FromTop,
    /// Enter from the bottom edge, moving up.
    FromBottom,
}

impl SlideDirection {
    // Where the incoming scene starts, in canvas fractions.
    fn origin(self) -> Vec2 {
        match self {
            Self::FromLeft => Vec2::new(-1.0, 0.0),
            Self::FromRight => Vec2::new(1.0, 0.0),
            Self::FromTop => Vec2::new(0.0, -1.0),
            Self::FromBottom => Vec2::new(0.0, 1.0),
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "from_left" | "left" | "ltr" => Some(Self::FromLeft),
            "from_right" | "right" | "rtl" => Some(Self::FromRight),
            "from_top" | "top" | "ttb" => Some(Self::FromTop),
            "from_bottom" | "bottom" | "btt" => Some(Self::FromBottom),
            _ => None,
        }
    }
}

/// Visual effect used to blend two adjacent scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionKind {
    /// Crossfade: outgoing fades out while incoming fades in.
    Fade,
    /// Incoming pushes in from an edge, outgoing is pushed out the opposite side.
    Slide {
        /// Edge the incoming scene enters from.
        direction: SlideDirection,
    },
    /// Incoming is revealed progressively from an edge on top of a static outgoing scene.
    Wipe {
        /// Edge the reveal starts from.
        direction: SlideDirection,
    },
    /// Hard cut halfway through the window.
    None,
}

/// Partial reveal of a layer, growing from `direction`'s edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reveal {
    /// Edge the visible region grows from.
    pub direction: SlideDirection,
    /// Visible fraction of the layer in `[0, 1]`.
    pub fraction: f64,
}

/// Compositing parameters for one scene layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerComposite {
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
    /// Layer offset as a fraction of the canvas size.
    pub offset: Vec2,
    /// Optional partial reveal.
    pub reveal: Option<Reveal>,
}

impl Default for LayerComposite {
    fn default() -> Self {
        Self::identity()
    }
}

impl LayerComposite {
    /// Fully opaque, unshifted, fully revealed.
    pub const fn identity() -> Self {
        Self {
            opacity: 1.0,
            offset: Vec2::ZERO,
            reveal: None,
        }
    }

    fn with_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::identity()
        }
    }

    fn with_offset(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::identity()
        }
    }

    /// Offset in pixels for `canvas`.
    pub fn offset_px(&self, canvas: Canvas) -> Vec2 {
        Vec2::new(
            self.offset.x * f64::from(canvas.width),
            self.offset.y * f64::from(canvas.height),
        )
    }
}

impl TransitionKind {
    /// Map transition progress to `(outgoing, incoming)` compositing parameters.
    ///
    /// `progress` is clamped to `[0, 1]`.
    pub fn presentation(self, progress: f64) -> (LayerComposite, LayerComposite) {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Self::Fade => (
                LayerComposite::with_opacity(1.0 - p),
                LayerComposite::with_opacity(p),
            ),
            Self::Slide { direction } => {
                let origin = direction.origin();
                (
                    LayerComposite::with_offset(-origin * p),
                    LayerComposite::with_offset(origin * (1.0 - p)),
                )
            }
            Self::Wipe { direction } => (
                LayerComposite::identity(),
                LayerComposite {
                    reveal: Some(Reveal {
                        direction,
                        fraction: p,
                    }),
                    ..LayerComposite::identity()
                },
            ),
            Self::None => {
                let shown = if p < 0.5 { 0.0 } else { 1.0 };
                (
                    LayerComposite::with_opacity(1.0 - shown),
                    LayerComposite::with_opacity(shown),
                )
            }
        }
    }

    /// Stable lowercase name, e.g. `"slide-from-right"`.
    pub fn name(self) -> String {
        fn dir(d: SlideDirection) -> &'static str {
            match d {
                SlideDirection::FromLeft => "from-left",
                SlideDirection::FromRight => "from-right",
                SlideDirection::FromTop => "from-top",
                SlideDirection::FromBottom => "from-bottom",
            }
        }
        match self {
            Self::Fade => "fade".to_owned(),
            Self::Slide { direction } => format!("slide-{}", dir(direction)),
            Self::Wipe { direction } => format!("wipe-{}", dir(direction)),
            Self::None => "none".to_owned(),
        }
    }
}

/// Parse names such as `"fade"`, `"slide-from-bottom"` or `"wipe:rtl"`.
///
/// Slides and wipes without a direction enter from the left.
pub fn parse_transition(name: &str) -> PitchResult<TransitionKind> {
    let key = name.trim().to_ascii_lowercase().replace('-', "_");
    if key.is_empty() {
        return Err(PitchError::configuration("transition kind must be non-empty"));
    }

    let (head, rest) = match key.split_once([':', '_']) {
        Some((h, r)) => (h, Some(r)),
        None => (key.as_str(), None),
    };
    let direction = |rest: Option<&str>| -> PitchResult<SlideDirection> {
        match rest {
            None => Ok(SlideDirection::FromLeft),
            Some(r) => SlideDirection::parse(r).ok_or_else(|| {
                PitchError::configuration(format!("unknown transition direction '{r}'"))
            }),
        }
    };

    match head {
        "fade" | "crossfade" if rest.is_none() => Ok(TransitionKind::Fade),
        "slide" => Ok(TransitionKind::Slide {
            direction: direction(rest)?,
        }),
        "wipe" => Ok(TransitionKind::Wipe {
            direction: direction(rest)?,
        }),
        "none" | "cut" if rest.is_none() => Ok(TransitionKind::None),
        "from" => SlideDirection::parse(&key)
            .map(|direction| TransitionKind::Slide { direction })
            .ok_or_else(|| PitchError::configuration(format!("unknown transition '{name}'"))),
        _ => Err(PitchError::configuration(format!(
            "unknown transition kind '{name}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
