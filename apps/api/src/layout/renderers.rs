//! One builder per semantic block type.
//!
//! Builders only describe blocks; placing them on pages is the composer's job.
//! Absent or blank fields drop the sub-part that would have shown them. A
//! builder returns `None` when nothing at all is left to draw.

use crate::layout::block::{Block, Fragment, Row};
use crate::layout::flow::PageBounds;
use crate::layout::measure::TextMeasurer;
use crate::layout::style::LayoutStyle;
use crate::models::dates::{date_range, format_date};
use crate::models::page::{Align, Color, FontStyle};
use crate::models::resume::{
    non_empty, Basics, Certificate, EducationEntry, Language, ProjectEntry, SkillGroup, WorkEntry,
};

/// Text of one column cell before it is given a position.
struct Cell {
    text: String,
    size: f32,
    style: FontStyle,
    color: Color,
}

pub struct BlockRenderer<'a> {
    style: &'a LayoutStyle,
    measurer: &'a TextMeasurer,
    bounds: PageBounds,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(style: &'a LayoutStyle, measurer: &'a TextMeasurer) -> Self {
        BlockRenderer {
            style,
            measurer,
            bounds: style.bounds(),
        }
    }

    fn fragment(&self, text: &str, size: f32, style: FontStyle, color: Color) -> Fragment {
        Fragment {
            text: text.to_string(),
            font_size: size,
            style,
            color,
            align: Align::Left,
            x: self.bounds.left,
            width: self.bounds.content_width(),
        }
    }

    fn centered(&self, text: &str, size: f32, style: FontStyle, color: Color) -> Fragment {
        Fragment {
            align: Align::Center,
            x: self.bounds.center_x(),
            ..self.fragment(text, size, style, color)
        }
    }

    fn body(&self, text: &str) -> Fragment {
        self.fragment(
            text,
            self.style.sizes.body,
            FontStyle::Normal,
            self.style.palette.text,
        )
    }

    fn detail(&self, text: &str) -> Cell {
        Cell {
            text: text.to_string(),
            size: self.style.sizes.detail,
            style: FontStyle::Normal,
            color: self.style.palette.muted,
        }
    }

    fn title_cell(&self, text: &str) -> Cell {
        Cell {
            text: text.to_string(),
            size: self.style.sizes.entry_title,
            style: FontStyle::Bold,
            color: self.style.palette.text,
        }
    }

    fn subtitle_cell(&self, text: &str) -> Cell {
        Cell {
            text: text.to_string(),
            size: self.style.sizes.entry_subtitle,
            style: FontStyle::Italic,
            color: self.style.palette.text,
        }
    }

    /// Centered name, optional headline, then the contact line.
    pub fn header(&self, basics: &Basics) -> Option<Block> {
        let sizes = &self.style.sizes;
        let palette = &self.style.palette;
        let mut block = Block::new("header");

        if let Some(name) = non_empty(&basics.name) {
            block.push(Row::Line(self.centered(
                name,
                sizes.name,
                FontStyle::Bold,
                palette.accent,
            )));
        }
        if let Some(label) = non_empty(&basics.label) {
            block.push(Row::Line(self.centered(
                label,
                sizes.headline,
                FontStyle::Normal,
                palette.muted,
            )));
        }

        let mut contacts: Vec<&str> = Vec::new();
        contacts.extend(non_empty(&basics.phone));
        contacts.extend(non_empty(&basics.email));
        contacts.extend(basics.profiles.iter().filter_map(|p| non_empty(&p.url)));
        contacts.extend(non_empty(&basics.url));
        if !contacts.is_empty() {
            let line = contacts.join(&self.style.contact_separator);
            block.push(Row::Line(self.centered(
                &line,
                sizes.contact,
                FontStyle::Normal,
                palette.text,
            )));
        }

        if block.rows.is_empty() {
            return None;
        }
        block.push(Row::Space(self.style.spacing.after_header));
        Some(block)
    }

    pub fn section_title(&self, title: &str) -> Block {
        let spacing = &self.style.spacing;
        let text = if self.style.uppercase_section_titles {
            title.to_uppercase()
        } else {
            title.to_string()
        };

        let mut block = Block::new(format!("section: {title}"));
        block.push(Row::LeadingSpace(spacing.before_section));
        block.push(Row::Line(self.fragment(
            &text,
            self.style.sizes.section_title,
            FontStyle::Bold,
            self.style.palette.accent,
        )));
        block.push(Row::Space(spacing.title_rule_gap));
        block.push(Row::Rule {
            x: self.bounds.left,
            width: self.bounds.content_width(),
            thickness: spacing.rule_thickness,
            color: self.style.palette.rule,
        });
        block.push(Row::Space(spacing.after_rule));
        block
    }

    pub fn summary(&self, text: &str) -> Block {
        let mut block = Block::new("summary");
        block.push(Row::Line(self.body(text)));
        block
    }

    pub fn work(&self, entry: &WorkEntry) -> Option<Block> {
        let mut left = Vec::new();
        left.extend(non_empty(&entry.name).map(|s| self.title_cell(s)));
        left.extend(non_empty(&entry.position).map(|s| self.subtitle_cell(s)));

        let mut right = Vec::new();
        right.extend(
            date_range(entry.start_date.as_deref(), entry.end_date.as_deref())
                .map(|range| self.detail(&range)),
        );
        right.extend(non_empty(&entry.url).map(|s| self.detail(s)));

        let label = non_empty(&entry.name)
            .or(non_empty(&entry.position))
            .unwrap_or("untitled");
        let mut block = Block::new(format!("work: {label}"));
        self.push_heading(&mut block, left, right);
        self.push_paragraph(&mut block, non_empty(&entry.summary));
        self.push_bullets(&mut block, &entry.highlights);
        finish(block)
    }

    pub fn education(&self, entry: &EducationEntry) -> Option<Block> {
        let mut left = Vec::new();
        left.extend(non_empty(&entry.institution).map(|s| self.title_cell(s)));
        let degree = match (non_empty(&entry.study_type), non_empty(&entry.area)) {
            (Some(kind), Some(area)) => Some(format!("{kind} in {area}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        };
        left.extend(degree.map(|d| self.subtitle_cell(&d)));

        let mut right = Vec::new();
        right.extend(
            date_range(entry.start_date.as_deref(), entry.end_date.as_deref())
                .map(|range| self.detail(&range)),
        );
        right.extend(non_empty(&entry.score).map(|gpa| self.detail(&format!("GPA: {gpa}"))));

        let label = non_empty(&entry.institution).unwrap_or("untitled");
        let mut block = Block::new(format!("education: {label}"));
        self.push_heading(&mut block, left, right);
        finish(block)
    }

    pub fn project(&self, entry: &ProjectEntry) -> Option<Block> {
        let left: Vec<Cell> = non_empty(&entry.name)
            .map(|s| self.title_cell(s))
            .into_iter()
            .collect();
        let right: Vec<Cell> = non_empty(&entry.url)
            .map(|s| self.detail(s))
            .into_iter()
            .collect();

        let label = non_empty(&entry.name).unwrap_or("untitled");
        let mut block = Block::new(format!("project: {label}"));
        self.push_heading(&mut block, left, right);
        self.push_paragraph(&mut block, non_empty(&entry.description));

        let keywords = join_keywords(&entry.keywords);
        if !keywords.is_empty() {
            self.push_gap(&mut block, self.style.spacing.after_paragraph);
            block.push(self.inline("Technologies:", &keywords));
        }
        self.push_bullets(&mut block, &entry.highlights);
        finish(block)
    }

    /// `Category: kw1, kw2, …` flowing on one line, wrapping back to the left margin.
    pub fn skill(&self, group: &SkillGroup) -> Option<Block> {
        let keywords = join_keywords(&group.keywords);
        let name = non_empty(&group.name);
        let mut block = Block::new(format!("skill: {}", name.unwrap_or("untitled")));

        match (name, keywords.is_empty()) {
            (Some(name), false) => block.push(self.inline(&format!("{name}:"), &keywords)),
            (Some(name), true) => block.push(Row::Line(self.fragment(
                name,
                self.style.sizes.body,
                FontStyle::Bold,
                self.style.palette.text,
            ))),
            (None, false) => block.push(Row::Line(self.body(&keywords))),
            (None, true) => return None,
        }
        Some(block)
    }

    pub fn certificate(&self, cert: &Certificate) -> Option<Block> {
        let mut left = Vec::new();
        left.extend(non_empty(&cert.name).map(|s| Cell {
            size: self.style.sizes.body,
            ..self.title_cell(s)
        }));
        left.extend(non_empty(&cert.issuer).map(|s| Cell {
            size: self.style.sizes.detail,
            ..self.subtitle_cell(s)
        }));
        let right: Vec<Cell> = non_empty(&cert.date)
            .map(|d| self.detail(&format_date(d)))
            .into_iter()
            .collect();

        let label = non_empty(&cert.name).unwrap_or("untitled");
        let mut block = Block::new(format!("certificate: {label}"));
        self.push_heading(&mut block, left, right);
        finish(block)
    }

    pub fn language(&self, language: &Language) -> Option<Block> {
        let name = non_empty(&language.language)?;
        let mut block = Block::new(format!("language: {name}"));
        match non_empty(&language.fluency) {
            Some(fluency) => block.push(self.inline(&format!("{name}:"), fluency)),
            None => block.push(Row::Line(self.body(name))),
        }
        Some(block)
    }

    fn inline(&self, label: &str, body: &str) -> Row {
        Row::Inline {
            label: self.fragment(
                label,
                self.style.sizes.body,
                FontStyle::Bold,
                self.style.palette.text,
            ),
            body: self.body(body),
        }
    }

    /// Title/subtitle on the left, dates and details right-aligned on the same rows.
    fn push_heading(&self, block: &mut Block, left: Vec<Cell>, right: Vec<Cell>) {
        if left.is_empty() && right.is_empty() {
            return;
        }

        let content_width = self.bounds.content_width();
        let right_width = if right.is_empty() {
            0.0
        } else {
            right
                .iter()
                .map(|c| self.measurer.text_width(&c.text, c.size, c.style))
                .fold(0.0_f32, f32::max)
                .min(content_width * self.style.spacing.max_right_column)
        };
        let left_width = if right.is_empty() {
            content_width
        } else {
            content_width - right_width - self.style.spacing.column_gutter
        };

        let place = |cell: Cell, x: f32, width: f32, align: Align| Fragment {
            text: cell.text,
            font_size: cell.size,
            style: cell.style,
            color: cell.color,
            align,
            x,
            width,
        };
        let left = left
            .into_iter()
            .map(|c| place(c, self.bounds.left, left_width, Align::Left))
            .collect();
        let right = right
            .into_iter()
            .map(|c| place(c, self.bounds.right, right_width, Align::Right))
            .collect();
        block.push(Row::Columns { left, right });
    }

    fn push_paragraph(&self, block: &mut Block, text: Option<&str>) {
        if let Some(text) = text {
            self.push_gap(block, self.style.spacing.after_entry_heading);
            block.push(Row::Line(self.body(text)));
        }
    }

    /// Adds a gap only between rows, never at the start of a block.
    fn push_gap(&self, block: &mut Block, gap: f32) {
        if !block.rows.is_empty() {
            block.push(Row::Space(gap));
        }
    }

    fn push_bullets(&self, block: &mut Block, items: &[String]) {
        let spacing = &self.style.spacing;
        let glyph_x = self.bounds.left + spacing.bullet_indent;
        let text_x = glyph_x + spacing.bullet_text_offset;
        let mut first = true;

        for item in items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if first {
                self.push_gap(block, spacing.after_entry_heading);
                first = false;
            }
            let body = Fragment {
                x: text_x,
                width: self.bounds.right - text_x,
                ..self.body(item)
            };
            let glyph = Fragment {
                x: glyph_x,
                width: spacing.bullet_text_offset,
                ..self.body(&self.style.bullet_glyph)
            };
            block.push(Row::Bullet {
                glyph,
                body,
                space_after: spacing.after_bullet,
            });
        }
    }
}

fn finish(block: Block) -> Option<Block> {
    if block.rows.is_empty() {
        None
    } else {
        Some(block)
    }
}

fn join_keywords(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
