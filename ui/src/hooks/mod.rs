pub mod use_feedback_form;
