/// Input normalization and output escaping

pub mod escape;
pub mod validation;

pub use escape::escape_html;
pub use validation::{normalize_message, ValidationError};
