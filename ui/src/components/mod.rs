//! Shared building blocks of the upload page.
pub mod drop_zone;
pub mod feedback_panel;
pub mod pico;
