use std::sync::Arc;

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{PitchError, PitchResult},
    timeline::model::{Scene, SceneSpec, Timeline, TransitionSpec},
};

enum Entry {
    Scene(SceneSpec),
    Transition(TransitionSpec),
}

/// Fluent construction of a [`Timeline`]: scenes alternating with transitions.
///
/// Nothing is checked until [`TimelineBuilder::build`], which fails with
/// [`PitchError::Configuration`] on any timing inconsistency.
pub struct TimelineBuilder {
    fps: Fps,
    canvas: Canvas,
    entries: Vec<Entry>,
}

impl TimelineBuilder {
    /// Start an empty timeline.
    pub fn new(fps: Fps, canvas: Canvas) -> Self {
        Self {
            fps,
            canvas,
            entries: Vec::new(),
        }
    }

    /// Append a scene.
    pub fn scene(
        mut self,
        id: impl Into<String>,
        duration_frames: u64,
        scene: impl Scene + 'static,
    ) -> Self {
        self.entries.push(Entry::Scene(SceneSpec {
            id: id.into(),
            duration_frames,
            scene: Arc::new(scene),
        }));
        self
    }

    /// Append an already shared scene spec.
    pub fn scene_spec(mut self, spec: SceneSpec) -> Self {
        self.entries.push(Entry::Scene(spec));
        self
    }

    /// Join the previous scene to the next one.
    pub fn transition(mut self, spec: TransitionSpec) -> Self {
        self.entries.push(Entry::Transition(spec));
        self
    }

    /// Validate and freeze the timeline.
    pub fn build(self) -> PitchResult<Timeline> {
        let mut scenes = Vec::new();
        let mut transitions = Vec::new();
        let mut expect_scene = true;

        for (pos, entry) in self.entries.into_iter().enumerate() {
            match (entry, expect_scene) {
                (Entry::Scene(spec), true) => scenes.push(spec),
                (Entry::Transition(spec), false) => transitions.push(spec),
                (Entry::Scene(spec), false) => {
                    return Err(PitchError::configuration(format!(
                        "scene '{}' at position {pos} must follow a transition",
                        spec.id
                    )));
                }
                (Entry::Transition(_), true) => {
                    return Err(PitchError::configuration(format!(
                        "transition at position {pos} must sit between two scenes"
                    )));
                }
            }
            expect_scene = !expect_scene;
        }

        if expect_scene && !transitions.is_empty() {
            return Err(PitchError::configuration(
                "timeline must end with a scene, not a transition",
            ));
        }

        Timeline::new(self.fps, self.canvas, scenes, transitions)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
