use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A single timed lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    pub start_time_ms: u64,
    #[serde(default)]
    pub end_time_ms: Option<u64>,
    pub text: String,
}

impl LyricLine {
    pub fn new(start_time_ms: u64, end_time_ms: Option<u64>, text: impl Into<String>) -> Self {
        Self {
            start_time_ms,
            end_time_ms,
            text: text.into(),
        }
    }

    /// Whether the line is active at `position_ms`. An open end never expires.
    pub fn contains(&self, position_ms: f64) -> bool {
        position_ms >= self.start_time_ms as f64
            && self
                .end_time_ms
                .map_or(true, |end| position_ms < end as f64)
    }
}

/// Read-only lyrics supplied by the lyrics collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lyrics {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    pub lines: Vec<LyricLine>,
}

impl Lyrics {
    pub fn new(lines: Vec<LyricLine>) -> Self {
        Self {
            title: None,
            artist: None,
            lines,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line that should be on screen at `position_ms`.
    ///
    /// The first line whose span contains the position wins. Before the first
    /// line nothing is shown; past the end of the last line it stays visible.
    pub fn line_at(&self, position_ms: f64) -> Option<&LyricLine> {
        if let Some(line) = self.lines.iter().find(|line| line.contains(position_ms)) {
            return Some(line);
        }

        let last = self.lines.last()?;
        match last.end_time_ms {
            Some(end) if position_ms >= end as f64 => Some(last),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lyrics {
        Lyrics::new(vec![
            LyricLine::new(1_000, Some(2_000), "first"),
            LyricLine::new(2_500, Some(4_000), "second"),
            LyricLine::new(4_000, Some(5_000), "third"),
        ])
    }

    #[test]
    fn picks_the_line_containing_the_position() {
        let lyrics = sample();
        assert_eq!(lyrics.line_at(1_500.0).unwrap().text, "first");
        assert_eq!(lyrics.line_at(4_000.0).unwrap().text, "third");
    }

    #[test]
    fn nothing_before_first_line_or_in_gaps() {
        let lyrics = sample();
        assert!(lyrics.line_at(0.0).is_none());
        assert!(lyrics.line_at(2_200.0).is_none());
    }

    #[test]
    fn last_line_sticks_after_the_end() {
        let lyrics = sample();
        assert_eq!(lyrics.line_at(60_000.0).unwrap().text, "third");
    }

    #[test]
    fn open_ended_lines_never_expire() {
        let lyrics = Lyrics::new(vec![LyricLine::new(0, None, "forever")]);
        assert_eq!(lyrics.line_at(1e9).unwrap().text, "forever");
    }

    #[test]
    fn parses_camel_case_json() {
        let lyrics = Lyrics::from_json(
            r#"{"title":"Song","lines":[{"startTimeMs":0,"endTimeMs":1000,"text":"hello"},{"startTimeMs":1000,"text":"bye"}]}"#,
        )
        .unwrap();
        assert_eq!(lyrics.title.as_deref(), Some("Song"));
        assert_eq!(lyrics.lines.len(), 2);
        assert_eq!(lyrics.lines[1].end_time_ms, None);
    }
}
