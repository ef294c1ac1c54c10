//! Export orchestration.
//!
//! [`Recorder`] turns an [`ExportRequest`] into an [`Artifact`]. PNG and JPEG
//! take a single capture; every other format runs the capture timeline and
//! hands the frame buffer to an [`Encoder`]. Only one export may be in flight
//! per recorder, and playback state is put back the way it was on every exit.

use std::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    config::CaptureConfig,
    encode::{Artifact, AudioTrack, EncodeJob, Encoder},
    render::{CaptureRequest, FrameCapturer},
    timeline::{
        capture_timeline, ExportProgress, ExportStage, FramePacing, PlaybackClock, TimelineParams,
    },
    LyricalError, Lyrics, Result,
};

/// Longest timeline export accepted, in seconds.
pub const MAX_DURATION_SECS: u32 = 300;

/// Highest frame rate offered for timeline exports.
pub const MAX_FRAME_RATE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Mp4,
    Webm,
    Gif,
    Png,
    Jpg,
    Svg,
}

/// Broad artifact family an [`ExportFormat`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Still,
    Animated,
    Video,
}

impl ExportFormat {
    pub fn kind(self) -> ArtifactKind {
        match self {
            Self::Png | Self::Jpg | Self::Svg => ArtifactKind::Still,
            Self::Gif => ArtifactKind::Animated,
            Self::Mp4 | Self::Webm => ArtifactKind::Video,
        }
    }

    /// Whether the export is a single capture at the current position.
    /// SVG is a still artifact but still runs the frame loop.
    pub fn is_single_capture(self) -> bool {
        matches!(self, Self::Png | Self::Jpg)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Webm => "webm",
            Self::Gif => "gif",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Webm => "video/webm",
            Self::Gif => "image/gif",
            Self::Png => "image/png",
            Self::Jpg => "image/jpeg",
            Self::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = LyricalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mp4" => Ok(Self::Mp4),
            "webm" => Ok(Self::Webm),
            "gif" => Ok(Self::Gif),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "svg" => Ok(Self::Svg),
            other => Err(LyricalError::InvalidRequest(format!(
                "unknown format `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionTier {
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "1440p")]
    P1440,
    #[serde(rename = "4k")]
    K4,
}

impl ResolutionTier {
    /// Final output size in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::P480 => (854, 480),
            Self::P720 => (1280, 720),
            Self::P1080 => (1920, 1080),
            Self::P1440 => (2560, 1440),
            Self::K4 => (3840, 2160),
        }
    }

    /// Capture scale used inside the frame loop. Kept below the still scale
    /// to bound per-frame cost.
    pub fn timeline_scale(self) -> f32 {
        match self {
            Self::P480 | Self::P720 | Self::P1080 => 1.0,
            Self::P1440 => 1.5,
            Self::K4 => 2.0,
        }
    }

    /// Capture scale used for single-frame exports.
    pub fn still_scale(self) -> f32 {
        match self {
            Self::P480 | Self::P720 => 1.0,
            Self::P1080 => 2.0,
            Self::P1440 => 2.5,
            Self::K4 => 4.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::P1440 => "1440p",
            Self::K4 => "4k",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResolutionTier {
    type Err = LyricalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "480p" => Ok(Self::P480),
            "720p" => Ok(Self::P720),
            "1080p" => Ok(Self::P1080),
            "1440p" => Ok(Self::P1440),
            "4k" | "2160p" => Ok(Self::K4),
            other => Err(LyricalError::InvalidRequest(format!(
                "unknown resolution `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
    Ultra,
}

impl FromStr for Quality {
    type Err = LyricalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "ultra" => Ok(Self::Ultra),
            other => Err(LyricalError::InvalidRequest(format!(
                "unknown quality `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    H264,
    H265,
    Vp8,
    Vp9,
    Av1,
}

impl FromStr for Codec {
    type Err = LyricalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "h264" => Ok(Self::H264),
            "h265" => Ok(Self::H265),
            "vp8" => Ok(Self::Vp8),
            "vp9" => Ok(Self::Vp9),
            "av1" => Ok(Self::Av1),
            other => Err(LyricalError::InvalidRequest(format!(
                "unknown codec `{other}`"
            ))),
        }
    }
}

/// A single export action. Built per request and consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub filename: String,
    pub format: ExportFormat,
    pub resolution: ResolutionTier,
    pub quality: Quality,
    pub frame_rate: u32,
    pub duration_secs: u32,
    pub codec: Codec,
    pub include_audio: bool,
}

impl ExportRequest {
    /// Target bitrate in kbps for the tier and quality.
    pub fn bitrate_kbps(&self) -> u32 {
        let base = match self.resolution {
            ResolutionTier::P480 => 500,
            ResolutionTier::P720 => 1_000,
            ResolutionTier::P1080 => 2_000,
            ResolutionTier::P1440 => 4_000,
            ResolutionTier::K4 => 8_000,
        };
        let factor = match self.quality {
            Quality::Low => 1,
            Quality::Medium => 2,
            Quality::High => 3,
            Quality::Ultra => 4,
        };
        base * factor
    }

    pub fn total_duration_ms(&self) -> u64 {
        u64::from(self.duration_secs) * 1_000
    }

    pub fn timeline_params(&self) -> TimelineParams {
        TimelineParams {
            total_duration_ms: self.total_duration_ms(),
            frame_rate: self.frame_rate,
            resolution: self.resolution,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.filename.trim().is_empty() {
            return Err(LyricalError::InvalidRequest(
                "a filename is required".to_string(),
            ));
        }
        if self.format.is_single_capture() {
            return Ok(());
        }
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(LyricalError::InvalidRequest(format!(
                "frame rate must be between 1 and {MAX_FRAME_RATE} fps"
            )));
        }
        if !(1..=MAX_DURATION_SECS).contains(&self.duration_secs) {
            return Err(LyricalError::InvalidRequest(format!(
                "duration must be between 1 and {MAX_DURATION_SECS} seconds"
            )));
        }
        Ok(())
    }
}

/// Collaborators and state borrowed for one export.
pub struct ExportSession<'a, C, E> {
    pub capturer: &'a mut C,
    pub encoder: &'a mut E,
    pub playback: &'a mut PlaybackClock,
    pub lyrics: Option<&'a Lyrics>,
    pub audio: Option<AudioTrack>,
}

/// Configuration options for the recording subsystem.
#[derive(Debug, Clone, Default)]
pub struct RecordingSettings {
    pub frame_quantum: Duration,
}

impl From<&CaptureConfig> for RecordingSettings {
    fn from(config: &CaptureConfig) -> Self {
        Self {
            frame_quantum: config.frame_quantum(),
        }
    }
}

/// Proof that this caller holds the recorder's in-flight flag. Dropping it
/// clears the flag.
#[derive(Debug)]
pub struct ExportGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Drives exports one at a time.
#[derive(Debug, Default)]
pub struct Recorder {
    settings: RecordingSettings,
    in_flight: AtomicBool,
}

impl Recorder {
    pub fn new(settings: RecordingSettings) -> Self {
        Self {
            settings,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an export currently holds the in-flight flag. Callers use this
    /// to disable their export trigger.
    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the in-flight flag, failing if another export holds it.
    pub fn begin(&self) -> Result<ExportGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ExportGuard {
                flag: &self.in_flight,
            })
            .map_err(|_| LyricalError::AlreadyExporting)
    }

    /// Runs one export to completion or failure.
    ///
    /// Playback is paused for the duration and restored afterwards whatever
    /// the outcome. Failures are reported once, never retried.
    pub async fn export<C, E, P>(
        &self,
        request: &ExportRequest,
        session: ExportSession<'_, C, E>,
        mut on_progress: P,
    ) -> Result<Artifact>
    where
        C: FrameCapturer,
        E: Encoder,
        P: FnMut(ExportProgress),
    {
        let result = self.export_inner(request, session, &mut on_progress).await;
        match &result {
            Ok(artifact) => tracing::info!(
                file = %artifact.file_name,
                bytes = artifact.bytes.len(),
                "export complete"
            ),
            Err(err) => tracing::error!(stage = err.stage(), %err, "export failed"),
        }
        result
    }

    async fn export_inner<C, E, P>(
        &self,
        request: &ExportRequest,
        session: ExportSession<'_, C, E>,
        on_progress: &mut P,
    ) -> Result<Artifact>
    where
        C: FrameCapturer,
        E: Encoder,
        P: FnMut(ExportProgress),
    {
        request.validate()?;
        let _guard = self.begin().inspect_err(|_| {
            tracing::warn!("export rejected: another export is in flight");
        })?;

        if !session.capturer.has_surface() {
            return Err(LyricalError::MissingSurface);
        }
        if session.lyrics.map_or(true, Lyrics::is_empty) {
            return Err(LyricalError::NoLyricsLoaded);
        }

        tracing::info!(
            format = %request.format,
            resolution = %request.resolution,
            fps = request.frame_rate,
            duration_secs = request.duration_secs,
            "export started"
        );

        let ExportSession {
            capturer,
            encoder,
            playback,
            audio,
            ..
        } = session;

        let snapshot = playback.clone();
        playback.pause();

        let result = self
            .capture_and_encode(
                request,
                capturer,
                encoder,
                snapshot.position_ms,
                audio,
                on_progress,
            )
            .await;

        *playback = snapshot;
        result
    }

    async fn capture_and_encode<C, E, P>(
        &self,
        request: &ExportRequest,
        capturer: &mut C,
        encoder: &mut E,
        position_ms: f64,
        audio: Option<AudioTrack>,
        on_progress: &mut P,
    ) -> Result<Artifact>
    where
        C: FrameCapturer,
        E: Encoder,
        P: FnMut(ExportProgress),
    {
        let kind = request.format.kind();
        let frames = if request.format.is_single_capture() {
            on_progress(ExportProgress::stage(ExportStage::CapturingFrame));
            let frame = capturer
                .capture(CaptureRequest {
                    position_ms,
                    scale: request.resolution.still_scale(),
                })
                .await
                .ok_or(LyricalError::FrameCaptureFailed { index: 0 })?;
            vec![frame]
        } else {
            let pacing = FramePacing::from_quantum(self.settings.frame_quantum);
            capture_timeline(capturer, &request.timeline_params(), pacing, on_progress).await?
        };

        on_progress(ExportProgress::percent(ExportStage::ProcessingVideo, 0));
        let job = EncodeJob {
            filename: request.filename.clone(),
            format: request.format,
            resolution: request.resolution,
            frame_rate: request.frame_rate,
            bitrate_kbps: request.bitrate_kbps(),
            codec: (kind == ArtifactKind::Video).then_some(request.codec),
            audio: audio.filter(|_| kind == ArtifactKind::Video && request.include_audio),
            frames,
        };

        let artifact = encoder.encode(job).await.map_err(|err| match err {
            LyricalError::EncodeFailed(_) => err,
            other => LyricalError::EncodeFailed(other.to_string()),
        })?;

        on_progress(ExportProgress::percent(ExportStage::Complete, 100));
        Ok(artifact)
    }
}
