//! Blocks as data.
//!
//! Renderers describe a block as rows of text fragments with their widths and
//! fonts declared up front. Both the height estimate and the draw pass walk
//! the same rows through the same [`TextMeasurer`] calls, so they cannot drift
//! apart.

use crate::errors::LayoutError;
use crate::layout::flow::{FlowState, EPSILON};
use crate::layout::measure::{Measured, TextMeasurer};
use crate::models::page::{Align, Color, DrawInstruction, FontStyle, HorizontalRule, TextRun};

/// A run of text with its wrapping box. `x` anchors the text according to `align`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub font_size: f32,
    pub style: FontStyle,
    pub color: Color,
    pub align: Align,
    pub x: f32,
    pub width: f32,
}

impl Fragment {
    fn measure(&self, m: &TextMeasurer) -> Result<Measured, LayoutError> {
        m.measure(&self.text, self.font_size, self.style, self.width)
    }

    fn run(&self, text: &str, x: f32, y: f32, max_width: f32) -> DrawInstruction {
        DrawInstruction::Text(TextRun {
            text: text.to_string(),
            x,
            y,
            max_width,
            font_size: self.font_size,
            style: self.style,
            color: self.color,
            align: self.align,
        })
    }

    /// Emits one run per wrapped line, starting at `top`. Returns the height used.
    fn emit(
        &self,
        m: &TextMeasurer,
        top: f32,
        out: &mut Vec<DrawInstruction>,
    ) -> Result<f32, LayoutError> {
        let measured = self.measure(m)?;
        let line_height = m.line_height(self.font_size);
        for (i, line) in measured.lines.iter().enumerate() {
            out.push(self.run(line, self.x, top + i as f32 * line_height, self.width));
        }
        Ok(measured.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// A wrapped paragraph.
    Line(Fragment),
    /// Two columns sharing one starting y. The left column flows top to bottom;
    /// the right column (dates, details) does the same independently.
    Columns {
        left: Vec<Fragment>,
        right: Vec<Fragment>,
    },
    /// A label followed by text on the same line; continuation lines return to
    /// `body.x` with the full `body.width`.
    Inline { label: Fragment, body: Fragment },
    /// A bullet glyph with hanging body text.
    Bullet {
        glyph: Fragment,
        body: Fragment,
        space_after: f32,
    },
    Rule {
        x: f32,
        width: f32,
        thickness: f32,
        color: Color,
    },
    Space(f32),
    /// Space that disappears when the row opens a page.
    LeadingSpace(f32),
}

impl Row {
    pub fn is_bullet(&self) -> bool {
        matches!(self, Row::Bullet { .. })
    }

    pub fn height(&self, m: &TextMeasurer, at_top: bool) -> Result<f32, LayoutError> {
        Ok(match self {
            Row::Line(fragment) => fragment.measure(m)?.height,
            Row::Columns { left, right } => {
                column_height(m, left)?.max(column_height(m, right)?)
            }
            Row::Inline { label, body } => InlineLayout::new(m, label, body)?.height,
            Row::Bullet {
                glyph,
                body,
                space_after,
            } => glyph.measure(m)?.height.max(body.measure(m)?.height) + space_after,
            Row::Rule { .. } => 0.0,
            Row::Space(h) => *h,
            Row::LeadingSpace(h) => {
                if at_top {
                    0.0
                } else {
                    *h
                }
            }
        })
    }

    /// Draws the row at the cursor and advances the cursor past it.
    pub fn render(
        &self,
        m: &TextMeasurer,
        flow: &mut FlowState,
    ) -> Result<Vec<DrawInstruction>, LayoutError> {
        let top = flow.y();
        let mut out = Vec::new();

        match self {
            Row::Line(fragment) => {
                let height = fragment.emit(m, top, &mut out)?;
                flow.advance(height);
            }
            Row::Columns { left, right } => {
                let mut left_y = top;
                for fragment in left {
                    left_y += fragment.emit(m, left_y, &mut out)?;
                }
                let mut right_y = top;
                for fragment in right {
                    right_y += fragment.emit(m, right_y, &mut out)?;
                }
                // Interleave both columns top to bottom; ties keep left before right.
                out.sort_by(|a, b| a.y().total_cmp(&b.y()));
                flow.advance(left_y.max(right_y) - top);
            }
            Row::Inline { label, body } => {
                let layout = InlineLayout::new(m, label, body)?;
                label.emit(m, top, &mut out)?;
                let line_height = m.line_height(body.font_size);
                let body_top = top + layout.body_offset;
                for (i, line) in layout.body.lines.iter().enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    let y = body_top + i as f32 * line_height;
                    if i == 0 {
                        out.push(body.run(line, layout.first_x, y, layout.first_width));
                    } else {
                        out.push(body.run(line, body.x, y, body.width));
                    }
                }
                flow.advance(layout.height);
            }
            Row::Bullet {
                glyph,
                body,
                space_after,
            } => {
                let glyph_height = glyph.emit(m, top, &mut out)?;
                let body_height = body.emit(m, top, &mut out)?;
                flow.advance(glyph_height.max(body_height) + space_after);
            }
            Row::Rule {
                x,
                width,
                thickness,
                color,
            } => {
                // A rule below the bottom margin would land disconnected from its title.
                if top <= flow.bounds().bottom + EPSILON {
                    out.push(DrawInstruction::Rule(HorizontalRule {
                        x: *x,
                        y: top,
                        width: *width,
                        thickness: *thickness,
                        color: *color,
                    }));
                }
            }
            Row::Space(h) => flow.advance(*h),
            Row::LeadingSpace(h) => {
                if !flow.at_top() {
                    flow.advance(*h);
                }
            }
        }
        Ok(out)
    }
}

fn column_height(m: &TextMeasurer, fragments: &[Fragment]) -> Result<f32, LayoutError> {
    fragments
        .iter()
        .map(|f| f.measure(m).map(|measured| measured.height))
        .sum()
}

/// Placement of an inline body after its (possibly wrapped) label.
struct InlineLayout {
    body: Measured,
    /// Distance from the row top to the label's last line, where the body starts.
    body_offset: f32,
    first_x: f32,
    first_width: f32,
    height: f32,
}

impl InlineLayout {
    fn new(m: &TextMeasurer, label: &Fragment, body: &Fragment) -> Result<Self, LayoutError> {
        let label_measured = label.measure(m)?;
        let last_line = label_measured.lines.last().map(String::as_str).unwrap_or("");
        let body_offset = label_measured.lines.len().saturating_sub(1) as f32
            * m.line_height(label.font_size);

        let label_width = m.text_width(last_line, label.font_size, label.style);
        let gap = m.text_width(" ", body.font_size, body.style);
        let first_x = label.x + label_width + gap;
        let first_width = body.x + body.width - first_x;
        let body_measured = m.measure_flowing(
            &body.text,
            body.font_size,
            body.style,
            first_width,
            body.width,
        )?;

        let height = label_measured
            .height
            .max(body_offset + body_measured.height);
        Ok(InlineLayout {
            body: body_measured,
            body_offset,
            first_x,
            first_width,
            height,
        })
    }
}

/// One semantically atomic layout unit: a header, a section title, an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Identifies the block in error messages and logs, e.g. `work: Acme`.
    pub label: String,
    pub rows: Vec<Row>,
}

impl Block {
    pub fn new(label: impl Into<String>) -> Self {
        Block {
            label: label.into(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Height of the whole block if started at a position where `at_top` holds.
    pub fn estimate(&self, m: &TextMeasurer, at_top: bool) -> Result<f32, LayoutError> {
        self.sum_rows(m, at_top, self.rows.len())
    }

    /// Height of everything up to and including the first bullet: the part of
    /// the block that must never be split across pages.
    pub fn head_estimate(&self, m: &TextMeasurer, at_top: bool) -> Result<f32, LayoutError> {
        let end = self
            .rows
            .iter()
            .position(Row::is_bullet)
            .map(|i| i + 1)
            .unwrap_or(self.rows.len());
        self.sum_rows(m, at_top, end)
    }

    fn sum_rows(&self, m: &TextMeasurer, at_top: bool, end: usize) -> Result<f32, LayoutError> {
        self.rows[..end]
            .iter()
            .map(|row| row.height(m, at_top))
            .sum::<Result<f32, LayoutError>>()
            .map_err(|e| e.in_block(&self.label))
    }
}
