use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    record::ResolutionTier,
    render::{CaptureRequest, CapturedFrame, FrameCapturer},
    LyricalError, Result,
};

/// Playback position as seen by the presentation layer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaybackClock {
    pub position_ms: f64,
    pub playing: bool,
}

impl PlaybackClock {
    pub fn at(position_ms: f64) -> Self {
        Self {
            position_ms: position_ms.max(0.0),
            playing: false,
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }
}

/// Export pipeline stage, used for progress and failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStage {
    CapturingFrame,
    CapturingFrames,
    ProcessingVideo,
    Complete,
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CapturingFrame => "Capturing frame",
            Self::CapturingFrames => "Capturing frames",
            Self::ProcessingVideo => "Processing video",
            Self::Complete => "Complete",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportProgress {
    pub stage: ExportStage,
    pub percentage: Option<u8>,
}

impl ExportProgress {
    pub fn stage(stage: ExportStage) -> Self {
        Self {
            stage,
            percentage: None,
        }
    }

    pub fn percent(stage: ExportStage, percentage: u8) -> Self {
        Self {
            stage,
            percentage: Some(percentage),
        }
    }
}

impl fmt::Display for ExportProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage {
            Some(percentage) => write!(f, "{}: {percentage}%", self.stage),
            None => write!(f, "{}", self.stage),
        }
    }
}

/// How the driver waits for the next render opportunity between captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePacing {
    /// Yield to the runtime once.
    Yield,
    Sleep(Duration),
}

impl FramePacing {
    pub fn from_quantum(quantum: Duration) -> Self {
        if quantum.is_zero() {
            Self::Yield
        } else {
            Self::Sleep(quantum)
        }
    }

    async fn wait(self) {
        match self {
            Self::Yield => tokio::task::yield_now().await,
            Self::Sleep(quantum) => tokio::time::sleep(quantum).await,
        }
    }
}

/// Inputs for one run of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineParams {
    pub total_duration_ms: u64,
    pub frame_rate: u32,
    pub resolution: ResolutionTier,
}

/// Sampled timestamps for a timeline export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    pub frame_count: u64,
    pub interval_ms: f64,
}

impl FramePlan {
    /// `ceil(duration_s × fps)` frames spaced `1000 / fps` ms apart.
    pub fn new(total_duration_ms: u64, frame_rate: u32) -> Result<Self> {
        if frame_rate == 0 {
            return Err(LyricalError::InvalidRequest(
                "frame rate must be positive".to_string(),
            ));
        }
        if total_duration_ms == 0 {
            return Err(LyricalError::InvalidRequest(
                "duration must be positive".to_string(),
            ));
        }

        let frame_count = total_duration_ms
            .checked_mul(u64::from(frame_rate))
            .map(|scaled| scaled.div_ceil(1000))
            .ok_or_else(|| {
                LyricalError::InvalidRequest(format!(
                    "{total_duration_ms} ms at {frame_rate} fps is too many frames"
                ))
            })?;

        Ok(Self {
            frame_count,
            interval_ms: 1000.0 / f64::from(frame_rate),
        })
    }

    pub fn position_ms(&self, index: u64) -> f64 {
        index as f64 * self.interval_ms
    }

    /// Completion after `captured` frames. Reaches 100 only once every frame
    /// has been captured.
    pub fn percentage(&self, captured: u64) -> u8 {
        if self.frame_count == 0 {
            return 100;
        }
        (captured.min(self.frame_count) * 100 / self.frame_count) as u8
    }
}

/// Captures one frame per sampled timestamp, strictly in order.
///
/// Progress is reported once at 0% and then after every frame. The first
/// capture that returns no data aborts the run and drops every frame
/// collected so far.
#[tracing::instrument(
    skip_all,
    fields(fps = params.frame_rate, resolution = %params.resolution)
)]
pub async fn capture_timeline<C, P>(
    capturer: &mut C,
    params: &TimelineParams,
    pacing: FramePacing,
    on_progress: &mut P,
) -> Result<Vec<CapturedFrame>>
where
    C: FrameCapturer,
    P: FnMut(ExportProgress),
{
    let plan = FramePlan::new(params.total_duration_ms, params.frame_rate)?;
    let scale = params.resolution.timeline_scale();
    tracing::debug!(frames = plan.frame_count, scale, "starting frame loop");

    let mut frames = Vec::with_capacity(plan.frame_count.min(4096) as usize);
    on_progress(ExportProgress::percent(ExportStage::CapturingFrames, 0));

    for index in 0..plan.frame_count {
        let position_ms = plan.position_ms(index);
        pacing.wait().await;

        let Some(frame) = capturer.capture(CaptureRequest { position_ms, scale }).await else {
            tracing::error!(index, position_ms, "frame capture returned no data");
            return Err(LyricalError::FrameCaptureFailed { index });
        };
        tracing::debug!(
            index,
            position_ms,
            width = frame.width,
            height = frame.height,
            "captured frame"
        );

        frames.push(frame);
        on_progress(ExportProgress::percent(
            ExportStage::CapturingFrames,
            plan.percentage(index + 1),
        ));
    }

    Ok(frames)
}
