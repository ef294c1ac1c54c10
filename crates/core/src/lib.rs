//! Core library for the Lyrical Elements visualiser.
//!
//! Lyric lines are tokenized into periodic-table tiles (with emoji and
//! math/physics fallbacks), rendered for an explicit playback position and
//! captured into frames that an encoder turns into a downloadable artifact.
//! Each module owns one stage of that pipeline.

pub mod config;
pub mod encode;
pub mod error;
pub mod glyphs;
pub mod lyrics;
pub mod record;
pub mod render;
pub mod timeline;
pub mod tokenize;

pub use config::{AppConfig, CaptureConfig, ExportConfig, RenderConfig};
pub use encode::{Artifact, AudioTrack, EncodeJob, Encoder, RasterEncoder};
pub use error::{LyricalError, Result};
pub use glyphs::{Category, GlyphEntry};
pub use lyrics::{LyricLine, Lyrics};
pub use record::{
    ArtifactKind, Codec, ExportFormat, ExportGuard, ExportRequest, ExportSession, Quality,
    Recorder, RecordingSettings, ResolutionTier,
};
pub use render::{CaptureRequest, CapturedFrame, FrameCapturer, TileRenderer};
pub use timeline::{
    capture_timeline, ExportProgress, ExportStage, FramePacing, FramePlan, PlaybackClock,
    TimelineParams,
};
pub use tokenize::{tokenize, DisplayToken, ElementGlyph, Tokenizer};
