//! # Async Tasks
//!
//! Background work started by the screen. Results come back as `DetailEvent`s.

pub mod image;

pub use image::ImageLoadCoordinator;
