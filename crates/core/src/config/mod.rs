use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    record::{Codec, ExportFormat, ExportRequest, Quality, ResolutionTier},
    Result,
};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub export: ExportConfig,
    pub render: RenderConfig,
    pub capture: CaptureConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON config file. Missing sections and fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Defaults for the export dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub filename: String,
    pub format: ExportFormat,
    pub resolution: ResolutionTier,
    pub quality: Quality,
    pub frame_rate: u32,
    pub duration_secs: u32,
    pub codec: Codec,
    pub include_audio: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "periodic_lyrics_video".to_string(),
            format: ExportFormat::Mp4,
            resolution: ResolutionTier::P1080,
            quality: Quality::Medium,
            frame_rate: 30,
            duration_secs: 10,
            codec: Codec::H264,
            include_audio: true,
        }
    }
}

impl ExportConfig {
    pub fn to_request(&self) -> ExportRequest {
        ExportRequest {
            filename: self.filename.clone(),
            format: self.format,
            resolution: self.resolution,
            quality: self.quality,
            frame_rate: self.frame_rate,
            duration_secs: self.duration_secs,
            codec: self.codec,
            include_audio: self.include_audio,
        }
    }
}

/// Layout and colours for the software tile renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Surface size at scale 1.
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    pub tile_gap: u32,
    pub word_gap: u32,
    pub padding: u32,
    pub background: [u8; 4],
    pub emoji_tile: [u8; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            tile_size: 56,
            tile_gap: 2,
            word_gap: 16,
            padding: 16,
            background: [12, 10, 24, 255],
            emoji_tile: [88, 28, 135, 255],
        }
    }
}

/// Pacing of the capture loop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Wait between frames. Zero yields to the runtime once instead of sleeping.
    pub frame_quantum_ms: u64,
}

impl CaptureConfig {
    pub fn frame_quantum(&self) -> Duration {
        Duration::from_millis(self.frame_quantum_ms)
    }
}
