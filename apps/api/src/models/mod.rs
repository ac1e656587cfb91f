pub mod dates;
pub mod page;
pub mod resume;

pub use page::{Align, Color, DrawInstruction, FontStyle, HorizontalRule, Page, TextRun};
pub use resume::ResumeDocument;
