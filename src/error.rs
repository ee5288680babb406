use thiserror::Error;

use crate::offsets::OffsetName;

/// Errors raised while building a controller.
///
/// Gesture handling itself never fails; everything that could go wrong is
/// checked once up front.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("no pixel offset available for {0:?}")]
    MissingOffset(OffsetName),

    #[error("pixel offset {name:?} must be finite and non-negative, got {value}")]
    InvalidOffset { name: OffsetName, value: f32 },

    #[error("{name} must be a finite, non-negative scale factor, got {value}")]
    InvalidScale { name: &'static str, value: f32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
