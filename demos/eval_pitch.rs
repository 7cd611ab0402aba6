use pitchreel::{
    EvalThreading, Evaluator, FrameIndex, PitchConfig, eval_all, pitch_timeline,
};

// Usage: cargo run --example eval_pitch -- [config.json]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => PitchConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => PitchConfig::default(),
    };
    let timeline = pitch_timeline(&cfg)?;
    println!(
        "{} scenes, {} frames ({:.1}s)",
        timeline.scenes().len(),
        timeline.total_frames(),
        cfg.fps.frames_to_secs(timeline.total_frames())
    );

    let (frames, stats) = eval_all(
        &timeline,
        &EvalThreading {
            parallel: true,
            ..EvalThreading::default()
        },
    )?;
    println!(
        "evaluated {} frames, {} distinct",
        stats.frames_total, stats.frames_unique
    );

    for f in [0usize, 110, 300, 800, 1319] {
        let Some(out) = frames.get(f) else { continue };
        let names: Vec<&str> = out.frame.layers.iter().map(|l| l.scene_id.as_str()).collect();
        println!("frame {f}: {names:?} {:016x}{:016x}", out.fingerprint.hi, out.fingerprint.lo);
    }

    let sample = Evaluator::eval_frame(&timeline, FrameIndex(timeline.total_frames() / 2))?;
    println!("{}", serde_json::to_string(&sample.position)?);
    Ok(())
}
