//! Reusable UI widgets
//!
//! - `swipe_row` - swipeable expense row and its gesture state machine
//! - `selector` - custom dropdown with sibling-exclusive open state

pub mod selector;
pub mod swipe_row;

pub use selector::SelectorGroup;
pub use swipe_row::{SwipeIntent, SwipeTracker};
