//! Document composer: one forward pass over the résumé in canonical section order.
//!
//! Each call owns a fresh [`FlowState`] and page list, so concurrent
//! compositions share nothing. Blocks are placed with a single break decision
//! made before anything is drawn; only bullets after a block's first one are
//! break-checked again while drawing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::LayoutError;
use crate::layout::block::Block;
use crate::layout::flow::{FlowState, EPSILON};
use crate::layout::measure::TextMeasurer;
use crate::layout::page_break;
use crate::layout::renderers::BlockRenderer;
use crate::layout::style::LayoutStyle;
use crate::models::page::{DrawInstruction, Page};
use crate::models::resume::ResumeDocument;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Summary,
    Work,
    Education,
    Projects,
    Skills,
    Certificates,
    Languages,
}

impl SectionKind {
    pub const CANONICAL_ORDER: [SectionKind; 8] = [
        SectionKind::Header,
        SectionKind::Summary,
        SectionKind::Work,
        SectionKind::Education,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Certificates,
        SectionKind::Languages,
    ];

    /// Section heading text. The header has none.
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Summary => Some("Summary"),
            SectionKind::Work => Some("Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::Skills => Some("Skills"),
            SectionKind::Certificates => Some("Certificates"),
            SectionKind::Languages => Some("Languages"),
        }
    }
}

/// How much of one page's content box was used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFill {
    pub page_index: usize,
    pub used_height: f32,
    pub available_height: f32,
    pub fill_ratio: f32,
    /// True when a block placed at the top margin ran past the bottom margin.
    pub overflowed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedDocument {
    pub pages: Vec<Page>,
    pub fill: Vec<PageFill>,
}

impl ComposedDocument {
    pub fn instruction_count(&self) -> usize {
        self.pages.iter().map(|p| p.instructions.len()).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out a résumé into pages of positioned draw instructions.
///
/// Pure and deterministic: the same document and style always produce the same
/// pages. Fails only on geometry contract violations.
pub fn compose_document(
    doc: &ResumeDocument,
    style: &LayoutStyle,
) -> Result<ComposedDocument, LayoutError> {
    style.validate()?;

    let measurer = TextMeasurer::for_style(style);
    let renderer = BlockRenderer::new(style, &measurer);
    let mut composer = Composer::new(style, &measurer);

    for kind in SectionKind::CANONICAL_ORDER {
        let items = section_blocks(kind, doc, &renderer);
        if items.is_empty() {
            continue;
        }
        debug!(section = ?kind, items = items.len(), "Composing section");

        match kind.title() {
            Some(title) => composer.place_titled(&renderer.section_title(title), &items[0])?,
            None => composer.place(&items[0])?,
        }
        for block in &items[1..] {
            composer.gap(style.spacing.between_items);
            composer.place(block)?;
        }
    }

    let composed = composer.finish();
    info!(
        pages = composed.pages.len(),
        instructions = composed.instruction_count(),
        "Composed résumé layout"
    );
    Ok(composed)
}

fn section_blocks(
    kind: SectionKind,
    doc: &ResumeDocument,
    renderer: &BlockRenderer<'_>,
) -> Vec<Block> {
    match kind {
        SectionKind::Header => doc
            .basics
            .as_ref()
            .and_then(|basics| renderer.header(basics))
            .into_iter()
            .collect(),
        SectionKind::Summary => doc
            .summary_text()
            .map(|text| renderer.summary(text))
            .into_iter()
            .collect(),
        SectionKind::Work => doc.work.iter().filter_map(|e| renderer.work(e)).collect(),
        SectionKind::Education => doc
            .education
            .iter()
            .filter_map(|e| renderer.education(e))
            .collect(),
        SectionKind::Projects => doc
            .projects
            .iter()
            .filter_map(|p| renderer.project(p))
            .collect(),
        SectionKind::Skills => doc.skills.iter().filter_map(|s| renderer.skill(s)).collect(),
        SectionKind::Certificates => doc
            .certificates
            .iter()
            .filter_map(|c| renderer.certificate(c))
            .collect(),
        SectionKind::Languages => doc
            .languages
            .iter()
            .filter_map(|l| renderer.language(l))
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composer state
// ────────────────────────────────────────────────────────────────────────────

struct Composer<'a> {
    measurer: &'a TextMeasurer,
    flow: FlowState,
    pages: Vec<Page>,
    /// Lowest y reached on each page.
    extents: Vec<f32>,
}

impl<'a> Composer<'a> {
    fn new(style: &LayoutStyle, measurer: &'a TextMeasurer) -> Self {
        let flow = FlowState::new(style.bounds());
        Composer {
            measurer,
            pages: vec![Page::new(0, style.page_width, style.page_height)],
            extents: vec![flow.y()],
            flow,
        }
    }

    /// The break decision reserves a block's head: every row up to and
    /// including its first bullet, or the whole block when it has no bullets.
    /// Later bullets are checked one by one while drawing.
    fn place(&mut self, block: &Block) -> Result<(), LayoutError> {
        let needed = block.head_estimate(self.measurer, self.flow.at_top())?;
        self.break_if_needed(needed);
        self.draw(block)
    }

    /// Places a section title together with the head of its first item so the
    /// title never ends a page on its own.
    fn place_titled(&mut self, title: &Block, first: &Block) -> Result<(), LayoutError> {
        let needed = title.estimate(self.measurer, self.flow.at_top())?
            + first.head_estimate(self.measurer, false)?;
        self.break_if_needed(needed);
        self.draw(title)?;
        self.draw(first)
    }

    /// Emits every row of a block. Bullets after the first are break-checked
    /// on their own, so only a bullet list can continue on the next page.
    fn draw(&mut self, block: &Block) -> Result<(), LayoutError> {
        let mut seen_bullet = false;
        for row in &block.rows {
            if row.is_bullet() {
                if seen_bullet {
                    let height = row
                        .height(self.measurer, self.flow.at_top())
                        .map_err(|e| e.in_block(&block.label))?;
                    self.break_if_needed(height);
                }
                seen_bullet = true;
            }
            let drawn = row
                .render(self.measurer, &mut self.flow)
                .map_err(|e| e.in_block(&block.label))?;
            self.emit(drawn);
        }
        Ok(())
    }

    fn gap(&mut self, height: f32) {
        if !self.flow.at_top() {
            self.flow.advance(height);
        }
    }

    fn break_if_needed(&mut self, height: f32) {
        if page_break::ensure_fits(&mut self.flow, height) {
            let bounds = *self.flow.bounds();
            self.pages.push(Page::new(
                self.flow.page_index(),
                bounds.page_width,
                bounds.page_height,
            ));
            self.extents.push(self.flow.y());
        }
    }

    fn emit(&mut self, drawn: Vec<DrawInstruction>) {
        let index = self.flow.page_index();
        self.pages[index].instructions.extend(drawn);
        self.extents[index] = self.extents[index].max(self.flow.y());
    }

    fn finish(self) -> ComposedDocument {
        let bounds = *self.flow.bounds();
        let available = bounds.content_height();
        let fill = self
            .extents
            .iter()
            .enumerate()
            .map(|(page_index, &extent)| {
                let used = extent - bounds.top;
                PageFill {
                    page_index,
                    used_height: used,
                    available_height: available,
                    fill_ratio: used / available,
                    overflowed: extent > bounds.bottom + EPSILON,
                }
            })
            .collect();

        ComposedDocument {
            pages: self.pages,
            fill,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
