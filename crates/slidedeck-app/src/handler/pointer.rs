//! Pointer/touch swipe handling

use slidedeck_core::{Point, SwipeDirection};
use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

/// Finish a press/release gesture and translate a qualifying swipe into a
/// transition request.
pub fn handle_release(state: &mut AppState, at: Point) -> Option<Message> {
    let direction = state.swipe.release(at)?;

    let extent = state.active_extent();
    if !extent.permits(direction) {
        debug!(
            "Swipe {:?} suppressed: content scrolled to {} of {}",
            direction,
            extent.offset,
            extent.max_offset()
        );
        return None;
    }

    Some(match direction {
        SwipeDirection::Left => Message::NextSlide,
        SwipeDirection::Right => Message::PreviousSlide,
    })
}
