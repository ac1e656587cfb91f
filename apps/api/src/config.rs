use anyhow::{anyhow, Context, Result};

use crate::layout::{FontFamily, LayoutStyle, StylePreset};

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub preset: StylePreset,
    /// Overrides the preset's font family when set.
    pub font: Option<FontFamily>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let preset = match lookup("LAYOUT_PRESET") {
            Some(name) => StylePreset::parse(&name)
                .ok_or_else(|| anyhow!("LAYOUT_PRESET '{name}' is not one of: classic, compact"))?,
            None => StylePreset::default(),
        };
        let font = lookup("LAYOUT_FONT")
            .map(|name| {
                FontFamily::parse(&name).ok_or_else(|| {
                    anyhow!("LAYOUT_FONT '{name}' is not one of: helvetica, times, courier")
                })
            })
            .transpose()?;

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            preset,
            font,
        })
    }

    /// The default style for requests that do not bring their own.
    pub fn style(&self) -> LayoutStyle {
        let mut style = self.preset.style();
        if let Some(font) = self.font {
            style.font = font;
        }
        style
    }
}
