pub mod evaluator;
pub mod fingerprint;
pub mod pipeline;
