//! This crate contains the wire contract with the external feedback service.

pub mod config;
pub mod error;
pub mod feedback_provider;
pub mod image_upload;

pub use config::FeedbackConfig;
pub use error::{FeedbackError, FEEDBACK_ERROR_MESSAGE};
pub use feedback_provider::{decode_feedback, FeedbackService, HttpFeedbackService};
pub use image_upload::ImageUpload;
