//! # Rendering
//!
//! - **[`console`]**: Text presenter used by the binary
//! - **[`icons`]**: Row icons and labels

pub mod console;
pub mod icons;
