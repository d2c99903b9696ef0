/// Convenience result type used across dlavid.
pub type DlavidResult<T> = Result<T, DlavidError>;

/// Top-level error taxonomy for the render pipeline.
///
/// Every variant is fatal to a run; nothing in the pipeline retries.
#[derive(thiserror::Error, Debug)]
pub enum DlavidError {
    /// A coordinate line did not split into exactly two integer tokens.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input stream.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A coordinate mapped to a cell outside the canvas.
    #[error("coordinate ({x}, {y}) maps outside the {width}x{height} canvas")]
    OutOfBounds {
        /// Offending x, relative to the canvas center.
        x: i64,
        /// Offending y, relative to the canvas center.
        y: i64,
        /// Canvas width in cells.
        width: u32,
        /// Canvas height in cells.
        height: u32,
    },

    /// The external encoder could not be run or exited with failure.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The input produced no frames, so there is nothing to encode.
    #[error("no frames were produced from the input")]
    EmptyFrameSet,

    /// Reading input or writing frames failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DlavidError {
    /// Build a [`DlavidError::Parse`] value.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Build a [`DlavidError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`DlavidError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
