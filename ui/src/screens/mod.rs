pub mod upload_feedback;
