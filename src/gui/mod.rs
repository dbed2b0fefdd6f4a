//! GUI module for the Swipense application
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main SwipenseApp struct, navigation, and modal dialog rendering
//! - `modal` - Modal controller: dialog state, form fields, save/delete commits
//! - `theme` - Centralized theme and styling system (light/dark AppTheme)
//! - `helpers` - Amount formatting
//! - `notifications` - Notification entries and toast timing
//! - `views` - View rendering (expenses, settings)
//! - `widgets` - Reusable UI widgets (swipe row, selector)
//!
//! ## Usage
//!
//! ```no_run
//! swipense::gui::launch().expect("Failed to launch GUI");
//! ```

mod app;
pub mod helpers;
pub mod modal;
pub mod notifications;
pub mod theme;
pub mod views;
pub mod widgets;

// Re-export main public API
pub use app::{launch, AppSection, SwipenseApp};

// Re-export commonly used types from submodules for convenience
pub use modal::{ModalController, ModalState};
pub use notifications::NotificationEntry;
pub use theme::{configure_style, AppTheme};
pub use widgets::{SelectorGroup, SwipeIntent, SwipeTracker};
