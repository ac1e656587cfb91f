// Résumé layout engine.
// Measures text, tracks the flow cursor, decides page breaks and composes pages
// of positioned draw instructions. Composition is CPU-bound and synchronous;
// async callers run it inside tokio::task::spawn_blocking.

pub mod block;
pub mod composer;
pub mod flow;
pub mod font_metrics;
pub mod measure;
pub mod page_break;
pub mod renderers;
pub mod style;

// Re-export the public API consumed by the HTTP layer.
pub use composer::{compose_document, ComposedDocument, PageFill, SectionKind};
pub use flow::{FlowState, PageBounds};
pub use font_metrics::FontFamily;
pub use measure::TextMeasurer;
pub use style::{LayoutStyle, StylePreset};
