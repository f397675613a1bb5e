//! Error types for epoch-engine operations.

use thiserror::Error;

use crate::domain::Domain;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EpochError {
    /// A pair with `start > stop`, or an endpoint that is not a real number.
    /// `index` is the position of the pair in the caller's input, when known.
    #[error("Invalid interval{}: {reason}", describe_index(.index))]
    InvalidInterval {
        index: Option<usize>,
        reason: String,
    },

    #[error("Invalid sampling rate: {0} (must be finite and positive)")]
    InvalidSamplingRate(f64),

    /// Two operands carry different bounded domains.
    #[error("Incompatible domains: {left} vs {right}")]
    IncompatibleDomain { left: Domain, right: Domain },
}

impl EpochError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EpochError::InvalidInterval {
            index: None,
            reason: reason.into(),
        }
    }

    /// Attach the input position to an `InvalidInterval` error.
    pub(crate) fn at(self, position: usize) -> Self {
        match self {
            EpochError::InvalidInterval { reason, .. } => EpochError::InvalidInterval {
                index: Some(position),
                reason,
            },
            other => other,
        }
    }
}

fn describe_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, EpochError>;
