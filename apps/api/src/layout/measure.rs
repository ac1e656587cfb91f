//! Text measurer: greedy word wrap and rendered height, in page units.
//!
//! The same routine serves the estimate pass and the render pass, so a block
//! always renders exactly as tall as it was estimated.

use crate::errors::LayoutError;
use crate::layout::flow::EPSILON;
use crate::layout::font_metrics::{get_metrics, FontFamily, FontMetricTable};
use crate::layout::style::LayoutStyle;
use crate::models::page::FontStyle;

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Wrapped lines of a text and their total height.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured {
    pub lines: Vec<String>,
    pub height: f32,
}

#[derive(Clone, Copy)]
pub struct TextMeasurer {
    metrics: &'static FontMetricTable,
    line_height_factor: f32,
}

impl TextMeasurer {
    pub fn new(font: FontFamily, line_height_factor: f32) -> Self {
        TextMeasurer {
            metrics: get_metrics(font),
            line_height_factor,
        }
    }

    pub fn for_style(style: &LayoutStyle) -> Self {
        TextMeasurer::new(style.font, style.line_height_factor)
    }

    /// Width of `text` on a single line, in page units.
    pub fn text_width(&self, text: &str, font_size: f32, style: FontStyle) -> f32 {
        self.metrics.measure_str(text, style) * font_size * PT_TO_MM
    }

    /// Vertical advance of one line of text at `font_size`.
    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_height_factor * PT_TO_MM
    }

    /// Wraps `text` into lines no wider than `max_width`.
    ///
    /// A single word wider than `max_width` sits alone on its own line and is
    /// never split further.
    pub fn measure(
        &self,
        text: &str,
        font_size: f32,
        style: FontStyle,
        max_width: f32,
    ) -> Result<Measured, LayoutError> {
        self.measure_flowing(text, font_size, style, max_width, max_width)
    }

    /// Like [`measure`](Self::measure), but the first line only has `first_width`
    /// available (text continuing after an inline label).
    ///
    /// If the first word does not fit in `first_width`, the first line is left
    /// empty (`""`) and the text starts on the second line at full width.
    pub fn measure_flowing(
        &self,
        text: &str,
        font_size: f32,
        style: FontStyle,
        first_width: f32,
        max_width: f32,
    ) -> Result<Measured, LayoutError> {
        if !(font_size > 0.0) || !font_size.is_finite() {
            return Err(LayoutError::invalid(
                "text",
                format!("font size must be positive, got {font_size}"),
            ));
        }
        if !(max_width > 0.0) || !max_width.is_finite() {
            return Err(LayoutError::invalid(
                "text",
                format!("max width must be positive, got {max_width}"),
            ));
        }

        let lines = self.wrap(text, font_size, style, first_width.min(max_width), max_width);
        let height = lines.len() as f32 * self.line_height(font_size);
        Ok(Measured { lines, height })
    }

    fn wrap(
        &self,
        text: &str,
        font_size: f32,
        style: FontStyle,
        first_width: f32,
        max_width: f32,
    ) -> Vec<String> {
        let space_w = self.metrics.space_width(style) * font_size * PT_TO_MM;
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;
        let mut limit = first_width;

        for word in text.split_whitespace() {
            let word_w = self.text_width(word, font_size, style);

            if current.is_empty() {
                if lines.is_empty() && first_width < max_width && word_w > limit + EPSILON {
                    // Nothing fits beside the label; continue on the next line.
                    lines.push(String::new());
                    limit = max_width;
                }
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w <= limit + EPSILON {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            } else {
                lines.push(std::mem::take(&mut current));
                limit = max_width;
                current.push_str(word);
                current_width = word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}
