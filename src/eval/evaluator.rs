use crate::{
    effects::transitions::LayerComposite,
    foundation::core::{FrameClock, FrameIndex},
    foundation::error::{PitchError, PitchResult},
    timeline::model::{ActivePosition, Timeline},
    visual::model::VisualDescription,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything the external renderer needs to draw one global frame.
pub struct EvaluatedFrame {
    /// Evaluated global frame index.
    pub frame: FrameIndex,
    /// Where the frame landed on the timeline.
    pub position: ActivePosition,
    /// Active scene layers in painter's order (outgoing first, incoming on top).
    pub layers: Vec<EvaluatedLayer>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One scene's contribution to a frame.
pub struct EvaluatedLayer {
    /// Scene identifier.
    pub scene_id: String,
    /// Frame relative to the scene start.
    pub local_frame: FrameIndex,
    /// How to composite this layer.
    pub composite: LayerComposite,
    /// The scene's declarative output.
    pub visual: VisualDescription,
}

/// Stateless frame evaluator.
pub struct Evaluator;

impl Evaluator {
    /// Resolve `frame` on the timeline and render every active scene.
    #[tracing::instrument(skip(timeline))]
    pub fn eval_frame(timeline: &Timeline, frame: FrameIndex) -> PitchResult<EvaluatedFrame> {
        let position = timeline.resolve(frame)?;
        let fps = timeline.fps();

        let layers = match &position {
            ActivePosition::InScene {
                scene_index,
                local_frame,
                ..
            } => vec![render_layer(
                timeline,
                *scene_index,
                *local_frame,
                LayerComposite::identity(),
            )?],
            ActivePosition::InTransition {
                transition_index,
                progress,
                from_local_frame,
                to_local_frame,
                ..
            } => {
                let spec = &timeline.transitions()[*transition_index];
                let eased = spec.ease.apply(*progress);
                let (outgoing, incoming) = spec.kind.presentation(eased);
                vec![
                    render_layer(timeline, *transition_index, *from_local_frame, outgoing)?,
                    render_layer(timeline, *transition_index + 1, *to_local_frame, incoming)?,
                ]
            }
        };

        tracing::trace!(layers = layers.len(), fps = fps.as_f64(), "frame evaluated");
        Ok(EvaluatedFrame {
            frame,
            position,
            layers,
        })
    }

    /// Evaluate the frame a rendering driver asks for.
    ///
    /// The driver's rate must match the timeline's; scene timing is baked in frames.
    pub fn eval_clock(timeline: &Timeline, clock: FrameClock) -> PitchResult<EvaluatedFrame> {
        if clock.fps != timeline.fps() {
            return Err(PitchError::evaluation(format!(
                "clock runs at {}/{} fps but the timeline is {}/{} fps",
                clock.fps.num,
                clock.fps.den,
                timeline.fps().num,
                timeline.fps().den
            )));
        }
        Self::eval_frame(timeline, clock.frame)
    }
}

fn render_layer(
    timeline: &Timeline,
    scene_index: usize,
    local_frame: FrameIndex,
    composite: LayerComposite,
) -> PitchResult<EvaluatedLayer> {
    let spec = timeline.scenes().get(scene_index).ok_or_else(|| {
        PitchError::evaluation(format!("scene index {scene_index} is out of range"))
    })?;
    let visual = spec.scene.render(local_frame, timeline.fps())?;
    Ok(EvaluatedLayer {
        scene_id: spec.id.clone(),
        local_frame,
        composite,
        visual,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
