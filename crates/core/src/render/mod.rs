//! Rendering and capture abstraction.
//!
//! A [`FrameCapturer`] renders the lyric view for an explicit playback position
//! and rasterizes it. The position travels with each [`CaptureRequest`] rather
//! than through shared playback state, so one capture can never observe a
//! position meant for another.

use image::{Rgba, RgbaImage};

use crate::{config::RenderConfig, glyphs::Category, tokenize::DisplayToken, Lyrics, Tokenizer};

/// Parameters for one capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRequest {
    pub position_ms: f64,
    /// Multiplier over the surface's logical size.
    pub scale: f32,
}

/// Raw RGBA8 pixels from one capture.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CapturedFrame {
    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            rgba: image.into_raw(),
        }
    }

    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn into_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba)
    }
}

impl std::fmt::Debug for CapturedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Renders and rasterizes the visual surface.
#[allow(async_fn_in_trait)]
pub trait FrameCapturer {
    /// Whether there is anything to capture from at all.
    fn has_surface(&self) -> bool;

    /// Renders the view at `request.position_ms` and captures it. `None`
    /// means the capture produced no data.
    async fn capture(&mut self, request: CaptureRequest) -> Option<CapturedFrame>;
}

/// Software renderer that draws element tiles for the active lyric line.
///
/// Tiles are flat category-coloured squares with a lighter border. No glyph
/// text is rasterised, so symbols and emoji do not appear in exported frames;
/// a text-capable renderer can be plugged in through [`FrameCapturer`].
#[derive(Debug)]
pub struct TileRenderer {
    lyrics: Lyrics,
    tokenizer: Tokenizer,
    config: RenderConfig,
}

impl TileRenderer {
    pub fn new(lyrics: Lyrics, config: RenderConfig) -> Self {
        Self {
            lyrics,
            tokenizer: Tokenizer::new(),
            config,
        }
    }

    /// Draws the line active at `position_ms`. Returns `None` if the scaled
    /// surface would be empty.
    pub fn render(&self, position_ms: f64, scale: f32) -> Option<RgbaImage> {
        let px = |value: u32| ((value as f32) * scale).round() as u32;
        let (width, height) = (px(self.config.width), px(self.config.height));
        if width == 0 || height == 0 {
            return None;
        }

        let mut image = RgbaImage::from_pixel(width, height, Rgba(self.config.background));
        let Some(line) = self.lyrics.line_at(position_ms) else {
            return Some(image);
        };

        let words = self.tokenizer.group_words(&line.text);
        let tile = px(self.config.tile_size).max(1);
        let gap = px(self.config.tile_gap);
        let word_gap = px(self.config.word_gap);
        let padding = px(self.config.padding);

        let rows = layout_rows(&words, width.saturating_sub(padding * 2), tile, gap, word_gap);
        let row_count = rows.len() as u32;
        let block_height = row_count * tile + row_count.saturating_sub(1) * word_gap;
        let mut y = height.saturating_sub(block_height) / 2;

        for row in rows {
            let mut x = width.saturating_sub(row.width) / 2;
            for word in row.words {
                for token in word {
                    let colour = match token {
                        DisplayToken::Emoji { .. } => Rgba(self.config.emoji_tile),
                        _ => category_colour(token.category().unwrap_or(Category::Unknown)),
                    };
                    draw_tile(&mut image, x, y, tile, colour);
                    x += tile + gap;
                }
                x = x - gap + word_gap;
            }
            y += tile + word_gap;
        }

        Some(image)
    }
}

impl FrameCapturer for TileRenderer {
    fn has_surface(&self) -> bool {
        self.config.width > 0 && self.config.height > 0
    }

    async fn capture(&mut self, request: CaptureRequest) -> Option<CapturedFrame> {
        self.render(request.position_ms, request.scale)
            .map(CapturedFrame::from_image)
    }
}

struct Row<'a> {
    words: Vec<&'a [DisplayToken]>,
    width: u32,
}

/// Greedy word wrap: a word moves to the next row when it would overflow,
/// unless it is the first word on its row.
fn layout_rows(
    words: &[Vec<DisplayToken>],
    max_width: u32,
    tile: u32,
    gap: u32,
    word_gap: u32,
) -> Vec<Row<'_>> {
    let mut rows: Vec<Row<'_>> = Vec::new();
    for word in words {
        let count = word.len() as u32;
        let word_width = count * tile + count.saturating_sub(1) * gap;
        match rows.last_mut() {
            Some(row) if row.width + word_gap + word_width <= max_width => {
                row.width += word_gap + word_width;
                row.words.push(word.as_slice());
            }
            _ => rows.push(Row {
                words: vec![word.as_slice()],
                width: word_width,
            }),
        }
    }
    rows
}

fn category_colour(category: Category) -> Rgba<u8> {
    match category {
        Category::AlkaliMetal => Rgba([220, 38, 38, 255]),
        Category::AlkalineEarthMetal => Rgba([234, 88, 12, 255]),
        Category::TransitionMetal => Rgba([202, 138, 4, 255]),
        Category::PostTransitionMetal => Rgba([22, 163, 74, 255]),
        Category::Metalloid => Rgba([13, 148, 136, 255]),
        Category::Nonmetal => Rgba([37, 99, 235, 255]),
        Category::Halogen => Rgba([79, 70, 229, 255]),
        Category::NobleGas => Rgba([147, 51, 234, 255]),
        Category::Lanthanide => Rgba([219, 39, 119, 255]),
        Category::Actinide => Rgba([190, 18, 60, 255]),
        Category::Symbol => Rgba([71, 85, 105, 255]),
        Category::Unknown => Rgba([0, 0, 0, 0]),
    }
}

fn lighten(colour: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = colour.0;
    let lift = |c: u8| c + (255 - c) / 3;
    Rgba([lift(r), lift(g), lift(b), a])
}

fn draw_tile(image: &mut RgbaImage, x: u32, y: u32, size: u32, colour: Rgba<u8>) {
    let border = (size / 28).max(1);
    fill_rect(image, x, y, size, size, lighten(colour));
    fill_rect(
        image,
        x + border,
        y + border,
        size.saturating_sub(border * 2),
        size.saturating_sub(border * 2),
        colour,
    );
}

fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, colour: Rgba<u8>) {
    let x_end = x.saturating_add(w).min(image.width());
    let y_end = y.saturating_add(h).min(image.height());
    for yy in y..y_end {
        for xx in x..x_end {
            image.put_pixel(xx, yy, colour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LyricLine;

    fn renderer() -> TileRenderer {
        let lyrics = Lyrics::new(vec![LyricLine::new(1_000, Some(2_000), "neon love")]);
        TileRenderer::new(lyrics, RenderConfig::default())
    }

    #[test]
    fn blank_before_the_first_line() {
        let image = renderer().render(0.0, 1.0).unwrap();
        let background = Rgba(RenderConfig::default().background);
        assert!(image.pixels().all(|p| *p == background));
    }

    #[test]
    fn draws_tiles_for_the_active_line() {
        let image = renderer().render(1_500.0, 1.0).unwrap();
        let background = Rgba(RenderConfig::default().background);
        assert!(image.pixels().any(|p| *p != background));
    }

    #[test]
    fn scale_multiplies_surface_size() {
        let image = renderer().render(1_500.0, 1.5).unwrap();
        assert_eq!(image.dimensions(), (1440, 810));
    }

    #[test]
    fn zero_sized_surface_captures_nothing() {
        let config = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        let renderer = TileRenderer::new(Lyrics::default(), config);
        assert!(!renderer.has_surface());
        assert!(renderer.render(0.0, 1.0).is_none());
    }

    #[test]
    fn rows_wrap_when_words_overflow() {
        let words = Tokenizer::new().group_words("neon neon neon");
        let rows = layout_rows(&words, 200, 56, 2, 16);
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| row.width <= 200 || row.words.len() == 1));
    }

    #[tokio::test]
    async fn capture_returns_rgba_bytes() {
        let mut renderer = renderer();
        let frame = renderer
            .capture(CaptureRequest {
                position_ms: 1_200.0,
                scale: 1.0,
            })
            .await
            .unwrap();
        assert_eq!(frame.rgba.len(), (frame.width * frame.height * 4) as usize);
        assert!(frame.into_image().is_some());
    }
}
