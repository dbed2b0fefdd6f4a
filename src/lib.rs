//! Swipense - swipe-gesture expense tracker
//!
//! A small desktop app demonstrating swipe-to-edit/delete list interaction:
//! drag an expense row right to edit it, left to delete it. The expense
//! collection is in-memory and session-scoped; only the user preferences
//! (theme, form defaults) persist between runs.

pub mod expense;
pub mod gui;
pub mod user_settings;
