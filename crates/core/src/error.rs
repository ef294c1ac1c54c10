/// Result alias that carries the custom [`LyricalError`] type.
pub type Result<T> = std::result::Result<T, LyricalError>;

/// Common error type for the core crate.
///
/// Export failures are terminal: the recorder surfaces exactly one of these
/// per export and never retries.
#[derive(Debug, thiserror::Error)]
pub enum LyricalError {
    /// The capture target is absent, so nothing can be rasterized.
    #[error("no capture surface is available")]
    MissingSurface,
    /// An export was requested but there are no lyrics to render.
    #[error("no lyrics are loaded")]
    NoLyricsLoaded,
    /// A capture inside the frame loop returned no data.
    #[error("frame capture failed at frame {index}")]
    FrameCaptureFailed { index: u64 },
    /// The encoder rejected the frame set.
    #[error("encoding failed: {0}")]
    EncodeFailed(String),
    /// Another export holds the in-flight guard.
    #[error("an export is already in progress")]
    AlreadyExporting,
    #[error("invalid export request: {0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Image(#[from] image::ImageError),
}

impl LyricalError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    /// Human-readable description of the stage the failure belongs to.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MissingSurface | Self::NoLyricsLoaded | Self::AlreadyExporting => {
                "Preparing export"
            }
            Self::InvalidRequest(_) => "Validating export options",
            Self::FrameCaptureFailed { .. } => "Capturing frames",
            Self::EncodeFailed(_) | Self::Image(_) => "Processing video",
            Self::Message(_) | Self::Io(_) | Self::Json(_) => "Export",
        }
    }
}

impl From<&str> for LyricalError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for LyricalError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_failures_report_their_stage_and_index() {
        let err = LyricalError::FrameCaptureFailed { index: 7 };
        assert_eq!(err.stage(), "Capturing frames");
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn plain_messages_convert() {
        let err: LyricalError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }
}
