// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal: the caller reports it and exits non-zero.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read input file '{}': {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input at line {line}: {reason}")]
    InputMalformed { line: usize, reason: String },
    #[error("window '{label}' ({start}..{end}) exceeds the {available} available records")]
    WindowOutOfBounds {
        label: String,
        start: usize,
        end: usize,
        available: usize,
    },
    #[error("window '{label}' has non-positive length ({start}..{end})")]
    InvalidWindow {
        label: String,
        start: usize,
        end: usize,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for RenderError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        RenderError::Plot(format!("{value:?}"))
    }
}

// src/error.rs
