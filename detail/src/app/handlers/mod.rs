//! # User Action Handlers
//!
//! Handlers for the screen's affordances.

pub(crate) mod navigation;
