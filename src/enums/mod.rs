pub mod commands;
pub mod feature_category;
pub mod implementation_complexity;
pub mod issue_state;
pub mod output_format;
pub mod priority;
