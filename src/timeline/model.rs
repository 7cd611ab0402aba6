use std::{fmt, sync::Arc};

use crate::{
    animation::ease::Ease,
    effects::transitions::TransitionKind,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{PitchError, PitchResult},
    visual::model::VisualDescription,
};

/// A self-contained visual segment, rendered from its local frame.
///
/// Implementations must be pure: the same `(local, fps)` always yields the same description,
/// so frames can be evaluated in any order and on any thread.
pub trait Scene: Send + Sync {
    /// Describe the scene at `local` frames after its start.
    fn render(&self, local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription>;
}

impl<F> Scene for F
where
    F: Fn(FrameIndex, Fps) -> PitchResult<VisualDescription> + Send + Sync,
{
    fn render(&self, local: FrameIndex, fps: Fps) -> PitchResult<VisualDescription> {
        self(local, fps)
    }
}

/// A scene placed on the timeline with a fixed duration.
#[derive(Clone)]
pub struct SceneSpec {
    /// Unique scene identifier.
    pub id: String,
    /// Duration in frames, `> 0`.
    pub duration_frames: u64,
    /// Renderer for the scene content.
    pub scene: Arc<dyn Scene>,
}

impl fmt::Debug for SceneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneSpec")
            .field("id", &self.id)
            .field("duration_frames", &self.duration_frames)
            .finish_non_exhaustive()
    }
}

/// Transition between two adjacent scenes; overlaps both by `duration_frames`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    /// Visual blend.
    pub kind: TransitionKind,
    /// Overlap length in frames, `> 0`.
    pub duration_frames: u64,
    /// Curve applied to progress before it reaches the presentation.
    #[serde(default)]
    pub ease: Ease,
}

impl TransitionSpec {
    /// Linear-timed transition.
    pub fn new(kind: TransitionKind, duration_frames: u64) -> Self {
        Self {
            kind,
            duration_frames,
            ease: Ease::Linear,
        }
    }

    /// Linear crossfade.
    pub fn fade(duration_frames: u64) -> Self {
        Self::new(TransitionKind::Fade, duration_frames)
    }

    /// Replace the timing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Reject zero-length transitions.
    pub fn validate(&self) -> PitchResult<()> {
        if self.duration_frames == 0 {
            return Err(PitchError::configuration(
                "transition duration_frames must be > 0",
            ));
        }
        Ok(())
    }
}

/// Where a global frame lands on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ActivePosition {
    /// Exactly one scene is visible.
    InScene {
        /// Index into [`Timeline::scenes`].
        scene_index: usize,
        /// Scene identifier.
        scene_id: String,
        /// Frame relative to the scene start.
        local_frame: FrameIndex,
    },
    /// Two scenes overlap inside a transition window.
    InTransition {
        /// Index into [`Timeline::transitions`]; also the outgoing scene index.
        transition_index: usize,
        /// Outgoing scene identifier.
        from_scene_id: String,
        /// Incoming scene identifier.
        to_scene_id: String,
        /// Transition effect.
        kind: TransitionKind,
        /// Linear progress through the window in `[0, 1)`.
        progress: f64,
        /// Local frame of the outgoing scene.
        from_local_frame: FrameIndex,
        /// Local frame of the incoming scene (starts at 0).
        to_local_frame: FrameIndex,
    },
}

/// Immutable sequence of scenes joined by overlapping transitions.
///
/// Built through [`TimelineBuilder`](crate::TimelineBuilder), which enforces that every
/// transition fits inside both neighbours and that no two transition windows overlap.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub(crate) fps: Fps,
    pub(crate) canvas: Canvas,
    pub(crate) scenes: Vec<SceneSpec>,
    // transitions[i] joins scenes[i] and scenes[i + 1].
    pub(crate) transitions: Vec<TransitionSpec>,
    pub(crate) offsets: Vec<u64>,
    pub(crate) total_frames: u64,
}

impl Timeline {
    pub(crate) fn new(
        fps: Fps,
        canvas: Canvas,
        scenes: Vec<SceneSpec>,
        transitions: Vec<TransitionSpec>,
    ) -> PitchResult<Self> {
        validate_layout(canvas, &scenes, &transitions)?;

        let mut offsets = Vec::with_capacity(scenes.len());
        let mut cursor = 0u64;
        for (i, scene) in scenes.iter().enumerate() {
            offsets.push(cursor);
            cursor += scene.duration_frames;
            if let Some(tr) = transitions.get(i) {
                cursor -= tr.duration_frames;
            }
        }

        tracing::debug!(
            scenes = scenes.len(),
            transitions = transitions.len(),
            total_frames = cursor,
            "timeline built"
        );

        Ok(Self {
            fps,
            canvas,
            scenes,
            transitions,
            offsets,
            total_frames: cursor,
        })
    }

    /// Playback rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Scenes in playback order.
    pub fn scenes(&self) -> &[SceneSpec] {
        &self.scenes
    }

    /// Transitions; entry `i` joins scene `i` and `i + 1`.
    pub fn transitions(&self) -> &[TransitionSpec] {
        &self.transitions
    }

    /// Start of scene `index` on the global timeline.
    pub fn scene_offset(&self, index: usize) -> Option<FrameIndex> {
        self.offsets.get(index).copied().map(FrameIndex)
    }

    /// Total length: scene durations minus transition overlaps.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Map a global frame to the active scene or transition.
    ///
    /// Frames at or past [`Self::total_frames`] are rejected with
    /// [`PitchError::Evaluation`].
    pub fn resolve(&self, global: FrameIndex) -> PitchResult<ActivePosition> {
        if global.0 >= self.total_frames {
            return Err(PitchError::evaluation(format!(
                "frame {} is out of bounds (timeline has {} frames)",
                global.0, self.total_frames
            )));
        }

        // Latest scene that has started; during a transition this is the incoming one.
        let idx = self
            .offsets
            .partition_point(|start| *start <= global.0)
            .saturating_sub(1);
        let start = self.offsets[idx];
        let local = global.0 - start;

        if idx > 0 {
            let tr = &self.transitions[idx - 1];
            if local < tr.duration_frames {
                let from = idx - 1;
                return Ok(ActivePosition::InTransition {
                    transition_index: from,
                    from_scene_id: self.scenes[from].id.clone(),
                    to_scene_id: self.scenes[idx].id.clone(),
                    kind: tr.kind,
                    progress: (local as f64 / tr.duration_frames as f64).clamp(0.0, 1.0),
                    from_local_frame: FrameIndex(global.0 - self.offsets[from]),
                    to_local_frame: FrameIndex(local),
                });
            }
        }

        Ok(ActivePosition::InScene {
            scene_index: idx,
            scene_id: self.scenes[idx].id.clone(),
            local_frame: FrameIndex(local),
        })
    }
}

fn validate_layout(
    canvas: Canvas,
    scenes: &[SceneSpec],
    transitions: &[TransitionSpec],
) -> PitchResult<()> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(PitchError::configuration("canvas width/height must be > 0"));
    }
    if scenes.is_empty() {
        return Err(PitchError::configuration(
            "timeline must contain at least one scene",
        ));
    }
    if transitions.len() + 1 != scenes.len() {
        return Err(PitchError::configuration(format!(
            "{} scenes need exactly {} transitions, got {}",
            scenes.len(),
            scenes.len() - 1,
            transitions.len()
        )));
    }

    let mut seen = std::collections::BTreeSet::new();
    for scene in scenes {
        if scene.id.trim().is_empty() {
            return Err(PitchError::configuration("scene id must be non-empty"));
        }
        if !seen.insert(scene.id.as_str()) {
            return Err(PitchError::configuration(format!(
                "duplicate scene id '{}'",
                scene.id
            )));
        }
        if scene.duration_frames == 0 {
            return Err(PitchError::configuration(format!(
                "scene '{}' duration must be > 0 frames",
                scene.id
            )));
        }
    }

    for (i, tr) in transitions.iter().enumerate() {
        tr.validate()?;
        let (a, b) = (&scenes[i], &scenes[i + 1]);
        let shorter = a.duration_frames.min(b.duration_frames);
        if tr.duration_frames > shorter {
            return Err(PitchError::configuration(format!(
                "transition '{}' -> '{}' is longer than an adjacent scene ({} > {} frames)",
                a.id, b.id, tr.duration_frames, shorter
            )));
        }
    }

    // A scene's incoming and outgoing windows must not overlap.
    for (i, scene) in scenes.iter().enumerate() {
        let incoming = if i > 0 {
            transitions[i - 1].duration_frames
        } else {
            0
        };
        let outgoing = transitions.get(i).map_or(0, |t| t.duration_frames);
        if incoming + outgoing > scene.duration_frames {
            return Err(PitchError::configuration(format!(
                "scene '{}' ({} frames) is too short for its transitions ({} in + {} out)",
                scene.id, scene.duration_frames, incoming, outgoing
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
