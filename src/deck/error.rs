use thiserror::Error;

/// Construction-time errors for deck trees.
///
/// Resolution itself never fails; everything that could go wrong is
/// rejected while the tree is being assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("A step value needs at least one frame")]
    EmptyFrames,

    #[error("Frame {index} is held for zero steps")]
    ZeroHold { index: usize },

    #[error("Frame {index} pushes the total step count past the addressable range")]
    TooManySteps { index: usize },
}
