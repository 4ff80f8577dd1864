use thiserror::Error;

/// Rejected parameters for one of the motion effects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    #[error("glyph alphabet is empty")]
    EmptyAlphabet,
    #[error("reveal rate must be finite and positive, got {0}")]
    InvalidRevealRate(f64),
    #[error("curve has {inputs} breakpoints but {outputs} output values")]
    CurveLengthMismatch { inputs: usize, outputs: usize },
    #[error("curve needs at least two keyframes, got {0}")]
    TooFewKeyframes(usize),
    #[error("curve breakpoints must be strictly increasing (index {0})")]
    UnorderedKeyframes(usize),
}
