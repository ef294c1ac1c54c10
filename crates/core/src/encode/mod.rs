use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    codecs::{
        gif::{GifEncoder, Repeat},
        jpeg::JpegEncoder,
        png::PngEncoder,
    },
    imageops::{self, FilterType},
    Delay, DynamicImage, ExtendedColorType, Frame, ImageEncoder, RgbaImage,
};

use crate::{
    record::{ArtifactKind, Codec, ExportFormat, ResolutionTier},
    render::CapturedFrame,
    LyricalError, Result,
};

const JPEG_QUALITY: u8 = 90;
const GIF_SPEED: i32 = 10;

/// Audio to mux into video exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    pub path: PathBuf,
}

impl AudioTrack {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Everything an encoder needs to produce one artifact.
#[derive(Debug, Clone)]
pub struct EncodeJob {
    pub filename: String,
    pub format: ExportFormat,
    pub resolution: ResolutionTier,
    pub frame_rate: u32,
    pub bitrate_kbps: u32,
    /// Set for video formats only.
    pub codec: Option<Codec>,
    pub audio: Option<AudioTrack>,
    pub frames: Vec<CapturedFrame>,
}

/// Downloadable export result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(filename: &str, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{filename}.{}", format.extension()),
            mime_type: format.mime_type(),
            bytes,
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Turns a captured frame set into an artifact.
#[allow(async_fn_in_trait)]
pub trait Encoder {
    async fn encode(&mut self, job: EncodeJob) -> Result<Artifact>;
}

/// Encoder backed by the `image` crate: PNG, JPEG and SVG stills plus
/// animated GIF. Frames are resized to the tier's output dimensions. Still
/// formats encode the first frame of the job.
///
/// No video codec is linked, so mp4 and webm jobs are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterEncoder;

impl Encoder for RasterEncoder {
    async fn encode(&mut self, job: EncodeJob) -> Result<Artifact> {
        tokio::task::spawn_blocking(move || encode_job(job))
            .await
            .map_err(|err| LyricalError::EncodeFailed(format!("encoder task failed: {err}")))?
    }
}

fn encode_job(job: EncodeJob) -> Result<Artifact> {
    if job.frames.is_empty() {
        return Err(LyricalError::EncodeFailed("no frames to encode".to_string()));
    }
    let (width, height) = job.resolution.dimensions();

    let bytes = match job.format.kind() {
        ArtifactKind::Video => {
            return Err(LyricalError::EncodeFailed(format!(
                "no video codec is available for {}",
                job.format
            )));
        }
        ArtifactKind::Animated => {
            encode_gif(job.frames, width, height, job.frame_rate)?
        }
        ArtifactKind::Still => {
            let frame = job.frames.into_iter().next().ok_or_else(|| {
                LyricalError::EncodeFailed("no frames to encode".to_string())
            })?;
            let image = fit(frame, width, height)?;
            match job.format {
                ExportFormat::Jpg => encode_jpeg(&image)?,
                ExportFormat::Svg => encode_svg(&image)?,
                _ => encode_png(&image)?,
            }
        }
    };

    tracing::debug!(format = %job.format, bytes = bytes.len(), "encoded artifact");
    Ok(Artifact::new(&job.filename, job.format, bytes))
}

fn fit(frame: CapturedFrame, width: u32, height: u32) -> Result<RgbaImage> {
    let image = frame
        .into_image()
        .ok_or_else(|| LyricalError::EncodeFailed("frame buffer has the wrong size".to_string()))?;
    if image.dimensions() == (width, height) {
        Ok(image)
    } else {
        Ok(imageops::resize(&image, width, height, FilterType::Triangle))
    }
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let (w, h) = image.dimensions();
    PngEncoder::new(&mut buf).write_image(image.as_raw(), w, h, ExtendedColorType::Rgba8)?;
    Ok(buf)
}

fn encode_jpeg(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let (w, h) = rgb.dimensions();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).write_image(
        rgb.as_raw(),
        w,
        h,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

fn encode_svg(image: &RgbaImage) -> Result<Vec<u8>> {
    let (w, h) = image.dimensions();
    let png = STANDARD.encode(encode_png(image)?);
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><image width="{w}" height="{h}" href="data:image/png;base64,{png}"/></svg>"#
    );
    Ok(svg.into_bytes())
}

fn encode_gif(frames: Vec<CapturedFrame>, width: u32, height: u32, fps: u32) -> Result<Vec<u8>> {
    let delay = Delay::from_numer_denom_ms(1_000, fps.max(1));
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut buf, GIF_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;
        for frame in frames {
            let image = fit(frame, width, height)?;
            encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(colour: [u8; 4]) -> CapturedFrame {
        CapturedFrame::from_image(RgbaImage::from_pixel(8, 6, image::Rgba(colour)))
    }

    fn job(format: ExportFormat, frames: Vec<CapturedFrame>) -> EncodeJob {
        EncodeJob {
            filename: "out".to_string(),
            format,
            resolution: ResolutionTier::P480,
            frame_rate: 10,
            bitrate_kbps: 500,
            codec: None,
            audio: None,
            frames,
        }
    }

    #[tokio::test]
    async fn png_is_resized_to_the_tier() {
        let artifact = RasterEncoder
            .encode(job(ExportFormat::Png, vec![frame([255, 0, 0, 255])]))
            .await
            .unwrap();
        assert_eq!(artifact.file_name, "out.png");
        let decoded = image::load_from_memory(&artifact.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (854, 480));
    }

    #[tokio::test]
    async fn jpeg_drops_alpha() {
        let artifact = RasterEncoder
            .encode(job(ExportFormat::Jpg, vec![frame([0, 0, 255, 128])]))
            .await
            .unwrap();
        assert_eq!(artifact.mime_type, "image/jpeg");
        assert_eq!(&artifact.bytes[..2], &[0xFF, 0xD8]);
    }

    #[tokio::test]
    async fn svg_embeds_a_png() {
        let artifact = RasterEncoder
            .encode(job(ExportFormat::Svg, vec![frame([0, 255, 0, 255])]))
            .await
            .unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.starts_with("<svg"));
        assert!(text.contains("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn svg_from_a_timeline_keeps_the_first_frame() {
        let frames = vec![frame([255, 0, 0, 255]), frame([0, 0, 255, 255])];
        let svg = RasterEncoder
            .encode(job(ExportFormat::Svg, frames))
            .await
            .unwrap();
        let single = RasterEncoder
            .encode(job(ExportFormat::Svg, vec![frame([255, 0, 0, 255])]))
            .await
            .unwrap();
        assert_eq!(svg.bytes, single.bytes);
    }

    #[tokio::test]
    async fn gif_holds_every_frame() {
        let frames = vec![
            frame([255, 0, 0, 255]),
            frame([0, 255, 0, 255]),
            frame([0, 0, 255, 255]),
        ];
        let artifact = RasterEncoder
            .encode(job(ExportFormat::Gif, frames))
            .await
            .unwrap();
        assert_eq!(&artifact.bytes[..6], b"GIF89a");

        use image::AnimationDecoder as _;
        let decoder =
            image::codecs::gif::GifDecoder::new(std::io::Cursor::new(artifact.bytes)).unwrap();
        assert_eq!(decoder.into_frames().count(), 3);
    }

    #[tokio::test]
    async fn video_formats_are_rejected() {
        let err = RasterEncoder
            .encode(job(ExportFormat::Mp4, vec![frame([0, 0, 0, 255])]))
            .await
            .unwrap_err();
        assert!(matches!(err, LyricalError::EncodeFailed(msg) if msg.contains("mp4")));
    }

    #[tokio::test]
    async fn empty_frame_sets_are_rejected() {
        let err = RasterEncoder
            .encode(job(ExportFormat::Gif, Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, LyricalError::EncodeFailed(_)));
    }

    #[test]
    fn data_url_is_base64() {
        let artifact = Artifact::new("x", ExportFormat::Png, b"hi".to_vec());
        assert_eq!(artifact.data_url(), "data:image/png;base64,aGk=");
    }
}
