//! Page break policy.
//!
//! A block that would cross the bottom margin starts a new page, with one
//! exception: a block that already starts at the top margin stays where it is
//! and may overflow. Pushing it would only produce another page it cannot fit
//! on either, forever.

use tracing::{debug, warn};

use crate::layout::flow::{FlowState, EPSILON};

pub fn will_fit(flow: &FlowState, estimated_height: f32) -> bool {
    flow.at_top() || estimated_height <= flow.remaining_space() + EPSILON
}

/// Starts a new page when the block will not fit. Returns true if a page was started.
pub fn ensure_fits(flow: &mut FlowState, estimated_height: f32) -> bool {
    if will_fit(flow, estimated_height) {
        if flow.at_top() && estimated_height > flow.remaining_space() + EPSILON {
            warn!(
                page = flow.page_index(),
                height = estimated_height,
                available = flow.remaining_space(),
                "Block taller than the page; placing it at the top margin and overflowing"
            );
        }
        return false;
    }

    debug!(
        page = flow.page_index(),
        y = flow.y(),
        height = estimated_height,
        "Page break"
    );
    flow.new_page();
    true
}
