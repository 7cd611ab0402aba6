use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    eval::evaluator::{EvaluatedFrame, Evaluator},
    eval::fingerprint::{FrameFingerprint, fingerprint_frame},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{PitchError, PitchResult},
    timeline::model::Timeline,
};

/// Threading and chunking for batch evaluation.
#[derive(Clone, Debug)]
pub struct EvalThreading {
    /// Evaluate frames of a chunk on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames per chunk; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters from a batch evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames whose fingerprint had not been seen earlier in the batch.
    pub frames_unique: u64,
}

/// One evaluated frame plus its content fingerprint.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// Evaluated frame.
    pub frame: EvaluatedFrame,
    /// Content hash, equal for frames that look identical.
    pub fingerprint: FrameFingerprint,
}

/// Evaluate every frame of the timeline in order.
pub fn eval_all(
    timeline: &Timeline,
    threading: &EvalThreading,
) -> PitchResult<(Vec<FrameOutput>, EvalStats)> {
    let range = FrameRange::new(FrameIndex(0), FrameIndex(timeline.total_frames()))?;
    eval_frames(timeline, range, threading)
}

/// Evaluate `range` (exclusive end) and return frames in frame order.
///
/// Parallel and sequential evaluation produce identical output because every frame is a pure
/// function of the timeline and its index.
#[tracing::instrument(skip(timeline, threading), fields(parallel = threading.parallel))]
pub fn eval_frames(
    timeline: &Timeline,
    range: FrameRange,
    threading: &EvalThreading,
) -> PitchResult<(Vec<FrameOutput>, EvalStats)> {
    if range.is_empty() {
        return Err(PitchError::evaluation("evaluation range must be non-empty"));
    }
    if range.end.0 > timeline.total_frames() {
        return Err(PitchError::evaluation(format!(
            "evaluation range end {} exceeds timeline length {}",
            range.end.0,
            timeline.total_frames()
        )));
    }

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = match &pool {
            Some(pool) => eval_chunk_parallel(timeline, chunk_start..chunk_end, pool)?,
            None => eval_chunk_sequential(timeline, chunk_start..chunk_end)?,
        };
        out.extend(chunk);
        chunk_start = chunk_end;
    }

    let mut seen = HashSet::with_capacity(out.len());
    let frames_unique = out.iter().filter(|f| seen.insert(f.fingerprint)).count() as u64;
    let stats = EvalStats {
        frames_total: out.len() as u64,
        frames_unique,
    };

    tracing::info!(
        frames = stats.frames_total,
        unique = stats.frames_unique,
        "batch evaluation finished"
    );
    Ok((out, stats))
}

fn eval_one(timeline: &Timeline, f: u64) -> PitchResult<FrameOutput> {
    let frame = Evaluator::eval_frame(timeline, FrameIndex(f))?;
    let fingerprint = fingerprint_frame(&frame);
    Ok(FrameOutput { frame, fingerprint })
}

fn eval_chunk_sequential(
    timeline: &Timeline,
    frames: std::ops::Range<u64>,
) -> PitchResult<Vec<FrameOutput>> {
    frames.map(|f| eval_one(timeline, f)).collect()
}

fn eval_chunk_parallel(
    timeline: &Timeline,
    frames: std::ops::Range<u64>,
    pool: &rayon::ThreadPool,
) -> PitchResult<Vec<FrameOutput>> {
    // Indexed parallel collect keeps frame order.
    pool.install(|| {
        frames
            .into_par_iter()
            .map(|f| eval_one(timeline, f))
            .collect::<PitchResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> PitchResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PitchError::configuration(
            "evaluation threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PitchError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pipeline.rs"]
mod tests;
