//! Static glyph-width tables for the three PDF base font families.
//!
//! Widths are in em units (relative to font size) and follow the standard
//! Adobe font metrics for the regular cut. A rendering backend can draw these
//! families without embedding anything, so the widths measured here are the
//! widths that end up on the page.
//!
//! Bold text is approximated by scaling the regular widths with a per-family
//! factor. Italic cuts share the regular widths.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

use crate::models::page::FontStyle;

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Neo-grotesque sans-serif. Default résumé face.
    #[default]
    Helvetica,
    /// Transitional serif.
    Times,
    /// Fixed-pitch.
    Courier,
}

impl FontFamily {
    pub fn parse(name: &str) -> Option<FontFamily> {
        match name.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "sans" => Some(FontFamily::Helvetica),
            "times" | "serif" => Some(FontFamily::Times),
            "courier" | "mono" => Some(FontFamily::Courier),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
/// Characters outside ASCII are looked up in `extra` first and fall back to
/// `average_char_width`.
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Typographic punctuation résumés actually use (bullets, dashes, middots).
    extra: &'static [(char, f32)],
    pub average_char_width: f32,
    /// Multiplier applied to every width when the text is set bold.
    pub bold_factor: f32,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        self.extra
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, w)| *w)
            .unwrap_or(self.average_char_width)
    }

    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str, style: FontStyle) -> f32 {
        let regular: f32 = s.chars().map(|c| self.char_width(c)).sum();
        if style.is_bold() {
            regular * self.bold_factor
        } else {
            regular
        }
    }

    pub fn space_width(&self, style: FontStyle) -> f32 {
        self.measure_str(" ", style)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    extra: &[('•', 0.350), ('·', 0.278), ('–', 0.556), ('—', 1.000), ('’', 0.222), ('é', 0.556)],
    average_char_width: 0.556,
    bold_factor: 1.07,
};

static TIMES_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Times,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0-9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    extra: &[('•', 0.350), ('·', 0.250), ('–', 0.500), ('—', 1.000), ('’', 0.333), ('é', 0.444)],
    average_char_width: 0.500,
    bold_factor: 1.05,
};

static COURIER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Courier,
    widths: [0.600; 95],
    extra: &[],
    average_char_width: 0.600,
    // Courier-Bold keeps the fixed 600-unit advance.
    bold_factor: 1.0,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Helvetica => &HELVETICA_TABLE,
        FontFamily::Times => &TIMES_TABLE,
        FontFamily::Courier => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
