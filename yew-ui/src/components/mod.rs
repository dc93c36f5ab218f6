pub mod config_error;
pub mod meeting_form;
