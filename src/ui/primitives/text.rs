//! Styled text spans measured in terminal columns.

use std::ops::Range;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Display width in terminal columns
    pub fn width(&self) -> usize {
        self.text.width()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let color = match color {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Warning => theme::colors::WARNING,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
        };

        let mut styled = self.text.as_str().with(color);
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

/// A row of spans. Column offsets are tracked so callers can map a
/// mouse position back to the span under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
    width: usize,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span and return the columns it occupies.
    pub fn push(&mut self, span: Span) -> Range<usize> {
        let start = self.width;
        self.width += span.width();
        self.spans.push(span);
        start..self.width
    }

    pub fn push_plain(&mut self, text: impl Into<String>) -> Range<usize> {
        self.push(Span::plain(text))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Text without any styling
    pub fn plain(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }

    pub fn render(&self, supports_color: bool) -> String {
        self.spans.iter().map(|s| s.render(supports_color)).collect()
    }

    /// Render, cutting the line at `max_width` columns.
    ///
    /// Wide characters that would straddle the limit are dropped.
    pub fn render_clipped(&self, max_width: usize, supports_color: bool) -> String {
        if self.width <= max_width {
            return self.render(supports_color);
        }

        let mut out = String::new();
        let mut used = 0;
        for span in &self.spans {
            if used >= max_width {
                break;
            }
            if used + span.width() <= max_width {
                out.push_str(&span.render(supports_color));
                used += span.width();
                continue;
            }

            let mut cut = String::new();
            for ch in span.text().chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > max_width {
                    break;
                }
                cut.push(ch);
                used += w;
            }
            let mut partial = span.clone();
            partial.text = cut;
            out.push_str(&partial.render(supports_color));
            break;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let s = Span::info("ok");
        assert_eq!(s.render(false), "ok");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let s = Span::dim("no");
        assert!(s.render(true).contains("\u{1b}["));
    }

    #[test]
    fn line_tracks_column_ranges() {
        let mut line = Line::new();
        assert_eq!(line.push_plain("ab"), 0..2);
        assert_eq!(line.push(Span::info("▼ ")), 2..4);
        assert_eq!(line.push_plain("日本"), 4..8);
        assert_eq!(line.width(), 8);
        assert_eq!(line.plain(), "ab▼ 日本");
    }

    #[test]
    fn clipping_respects_display_width() {
        let mut line = Line::new();
        line.push_plain("ab");
        line.push_plain("日本語");

        assert_eq!(line.render_clipped(5, false), "ab日");
        assert_eq!(line.render_clipped(6, false), "ab日本");
        assert_eq!(line.render_clipped(100, false), "ab日本語");
    }
}
