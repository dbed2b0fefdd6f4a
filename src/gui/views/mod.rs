//! View rendering for the application sections
//!
//! Each view is an inherent method on `SwipenseApp`:
//!
//! - `expenses` - the swipeable expense list
//! - `settings` - theme preference and form defaults

mod expenses;
mod settings;
