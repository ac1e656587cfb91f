//! Flow cursor: the write position for one document generation.
//!
//! A `FlowState` is created fresh by the composer for every document and is
//! never shared. It only moves forward: down the page, then on to the next page.

use serde::{Deserialize, Serialize};

/// Tolerance for comparing y positions that went through float arithmetic.
pub const EPSILON: f32 = 1e-3;

/// Page geometry in absolute page coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageBounds {
    pub page_width: f32,
    pub page_height: f32,
    /// y of the top margin, where every page starts writing.
    pub top: f32,
    /// y of the bottom margin, the last y content may reach.
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl PageBounds {
    pub fn content_width(&self) -> f32 {
        self.right - self.left
    }

    pub fn content_height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.content_width() / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    page_index: usize,
    y: f32,
    bounds: PageBounds,
}

impl FlowState {
    pub fn new(bounds: PageBounds) -> Self {
        FlowState {
            page_index: 0,
            y: bounds.top,
            bounds,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn bounds(&self) -> &PageBounds {
        &self.bounds
    }

    /// Moves the cursor down. Bounds are not checked here; the page break policy runs first.
    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    pub fn new_page(&mut self) {
        self.page_index += 1;
        self.y = self.bounds.top;
    }

    /// Space left above the bottom margin. Negative once content has overflowed.
    pub fn remaining_space(&self) -> f32 {
        self.bounds.bottom - self.y
    }

    /// True when nothing has been written on the current page yet.
    pub fn at_top(&self) -> bool {
        (self.y - self.bounds.top).abs() < EPSILON
    }
}
