//! Layout style: every geometry, type-size and spacing constant the renderers use.
//!
//! One style struct drives every document variant. `classic` is the default
//! A4 look, `compact` squeezes more onto a page. Styles deserialize with
//! `#[serde(default)]`, so a partial JSON style overrides only what it names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::LayoutError;
use crate::layout::font_metrics::FontFamily;
use crate::layout::flow::PageBounds;
use crate::models::page::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    #[default]
    Classic,
    Compact,
}

impl StylePreset {
    pub fn parse(name: &str) -> Option<StylePreset> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(StylePreset::Classic),
            "compact" => Some(StylePreset::Compact),
            _ => None,
        }
    }

    pub fn style(self) -> LayoutStyle {
        match self {
            StylePreset::Classic => LayoutStyle::classic(),
            StylePreset::Compact => LayoutStyle::compact(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn symmetric(vertical: f32, horizontal: f32) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::symmetric(30.0, 20.0)
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub name: f32,
    pub headline: f32,
    pub contact: f32,
    pub section_title: f32,
    pub entry_title: f32,
    pub entry_subtitle: f32,
    pub body: f32,
    pub detail: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            name: 20.0,
            headline: 11.0,
            contact: 9.5,
            section_title: 12.0,
            entry_title: 11.0,
            entry_subtitle: 10.0,
            body: 10.0,
            detail: 9.5,
        }
    }
}

/// Vertical and horizontal spacing in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Space below the header block.
    pub after_header: f32,
    /// Space above a section title, skipped when the title opens a page.
    pub before_section: f32,
    /// Gap between a section title's text and its rule.
    pub title_rule_gap: f32,
    /// Space between a section rule and the section's first item.
    pub after_rule: f32,
    /// Space between consecutive items of one section.
    pub between_items: f32,
    /// Space between an entry's heading rows and its body.
    pub after_entry_heading: f32,
    /// Space after each bullet.
    pub after_bullet: f32,
    /// Space after a description or narrative paragraph.
    pub after_paragraph: f32,
    /// Indent of the bullet glyph from the left margin.
    pub bullet_indent: f32,
    /// Offset of bullet text from the bullet glyph.
    pub bullet_text_offset: f32,
    /// Horizontal gap between the left column and the right-aligned date column.
    pub column_gutter: f32,
    /// Upper bound for the right column, as a fraction of the content width.
    pub max_right_column: f32,
    pub rule_thickness: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            after_header: 4.0,
            before_section: 5.0,
            title_rule_gap: 1.0,
            after_rule: 2.5,
            between_items: 3.0,
            after_entry_heading: 1.0,
            after_bullet: 0.5,
            after_paragraph: 1.0,
            bullet_indent: 3.0,
            bullet_text_offset: 3.5,
            column_gutter: 4.0,
            max_right_column: 0.4,
            rule_thickness: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub rule: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            text: Color::rgb(33, 33, 33),
            muted: Color::rgb(96, 96, 96),
            accent: Color::rgb(20, 54, 102),
            rule: Color::rgb(160, 160, 160),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub page_width: f32,
    pub page_height: f32,
    pub margins: Margins,
    pub font: FontFamily,
    /// Converts font size to vertical line advance.
    pub line_height_factor: f32,
    pub sizes: FontSizes,
    pub spacing: Spacing,
    pub palette: Palette,
    pub bullet_glyph: String,
    pub contact_separator: String,
    pub uppercase_section_titles: bool,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        LayoutStyle::classic()
    }
}

impl LayoutStyle {
    /// A4, 30 mm top/bottom and 20 mm side margins (170×237 content box).
    pub fn classic() -> Self {
        LayoutStyle {
            page_width: 210.0,
            page_height: 297.0,
            margins: Margins::default(),
            font: FontFamily::Helvetica,
            line_height_factor: 1.2,
            sizes: FontSizes::default(),
            spacing: Spacing::default(),
            palette: Palette::default(),
            bullet_glyph: "•".to_string(),
            contact_separator: " · ".to_string(),
            uppercase_section_titles: false,
        }
    }

    pub fn compact() -> Self {
        LayoutStyle {
            margins: Margins::symmetric(15.0, 15.0),
            sizes: FontSizes {
                name: 17.0,
                headline: 10.0,
                contact: 8.5,
                section_title: 10.5,
                entry_title: 10.0,
                entry_subtitle: 9.0,
                body: 9.0,
                detail: 8.5,
            },
            spacing: Spacing {
                after_header: 3.0,
                before_section: 3.5,
                after_rule: 1.5,
                between_items: 2.0,
                after_entry_heading: 0.5,
                after_bullet: 0.3,
                after_paragraph: 0.5,
                ..Spacing::default()
            },
            line_height_factor: 1.15,
            uppercase_section_titles: true,
            ..LayoutStyle::classic()
        }
    }

    pub fn bounds(&self) -> PageBounds {
        PageBounds {
            page_width: self.page_width,
            page_height: self.page_height,
            top: self.margins.top,
            bottom: self.page_height - self.margins.bottom,
            left: self.margins.left,
            right: self.page_width - self.margins.right,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - self.margins.left - self.margins.right
    }

    /// Applies a partial JSON style on top of this one. Fields the overrides
    /// name replace ours, nested objects merge field by field.
    pub fn with_overrides(&self, overrides: Value) -> Result<LayoutStyle, serde_json::Error> {
        let mut merged = serde_json::to_value(self)?;
        merge_json(&mut merged, overrides);
        serde_json::from_value(merged)
    }

    /// Rejects geometry that would make any measurement meaningless or move
    /// the cursor backwards.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |reason: String| Err(LayoutError::invalid("style", reason));

        let margins = [
            ("top", self.margins.top),
            ("right", self.margins.right),
            ("bottom", self.margins.bottom),
            ("left", self.margins.left),
        ];
        if let Some((name, margin)) = margins.iter().find(|(_, m)| *m < 0.0 || !m.is_finite()) {
            return invalid(format!("margin '{name}' must not be negative, got {margin}"));
        }

        if self.content_width() <= 0.0 || !self.content_width().is_finite() {
            return invalid(format!(
                "content width must be positive, got {}",
                self.content_width()
            ));
        }
        let content_height = self.page_height - self.margins.top - self.margins.bottom;
        if content_height <= 0.0 || !content_height.is_finite() {
            return invalid(format!(
                "content height must be positive, got {content_height}"
            ));
        }
        if self.line_height_factor <= 0.0 || !self.line_height_factor.is_finite() {
            return invalid(format!(
                "line height factor must be positive, got {}",
                self.line_height_factor
            ));
        }

        let sizes = [
            ("name", self.sizes.name),
            ("headline", self.sizes.headline),
            ("contact", self.sizes.contact),
            ("section_title", self.sizes.section_title),
            ("entry_title", self.sizes.entry_title),
            ("entry_subtitle", self.sizes.entry_subtitle),
            ("body", self.sizes.body),
            ("detail", self.sizes.detail),
        ];
        if let Some((name, size)) = sizes.iter().find(|(_, s)| *s <= 0.0 || !s.is_finite()) {
            return invalid(format!("font size '{name}' must be positive, got {size}"));
        }

        let sp = &self.spacing;
        let spacing = [
            ("after_header", sp.after_header),
            ("before_section", sp.before_section),
            ("title_rule_gap", sp.title_rule_gap),
            ("after_rule", sp.after_rule),
            ("between_items", sp.between_items),
            ("after_entry_heading", sp.after_entry_heading),
            ("after_bullet", sp.after_bullet),
            ("after_paragraph", sp.after_paragraph),
            ("bullet_indent", sp.bullet_indent),
            ("bullet_text_offset", sp.bullet_text_offset),
            ("column_gutter", sp.column_gutter),
            ("rule_thickness", sp.rule_thickness),
        ];
        if let Some((name, value)) = spacing.iter().find(|(_, v)| *v < 0.0 || !v.is_finite()) {
            return invalid(format!("spacing '{name}' must not be negative, got {value}"));
        }
        if !(sp.max_right_column > 0.0 && sp.max_right_column < 1.0) {
            return invalid(format!(
                "max right column must lie strictly between 0 and 1, got {}",
                sp.max_right_column
            ));
        }

        let hanging = self.spacing.bullet_indent + self.spacing.bullet_text_offset;
        if hanging >= self.content_width() {
            return invalid(format!(
                "bullet indent {hanging} leaves no room in content width {}",
                self.content_width()
            ));
        }
        Ok(())
    }
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, overrides) => *base = overrides,
    }
}
