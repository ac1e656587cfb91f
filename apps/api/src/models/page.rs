use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// One line of text, already wrapped, ready for a rendering backend.
///
/// `y` is the top edge of the line box. `x` anchors the run according to
/// `align`: left edge for `Left`, centre for `Center`, right edge for `Right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub max_width: f32,
    pub font_size: f32,
    pub style: FontStyle,
    pub color: Color,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalRule {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawInstruction {
    Text(TextRun),
    Rule(HorizontalRule),
}

impl DrawInstruction {
    pub fn y(&self) -> f32 {
        match self {
            DrawInstruction::Text(run) => run.y,
            DrawInstruction::Rule(rule) => rule.y,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawInstruction::Text(run) => Some(&run.text),
            DrawInstruction::Rule(_) => None,
        }
    }
}

/// A fixed-size page of positioned draw instructions, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub instructions: Vec<DrawInstruction>,
}

impl Page {
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Page {
            index,
            width,
            height,
            instructions: Vec::new(),
        }
    }

    /// Iterates the text content of every text run on the page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().filter_map(DrawInstruction::text)
    }
}
