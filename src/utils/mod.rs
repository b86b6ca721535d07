pub mod validation;

pub use validation::{sanitize_advertisements, sanitize_courses};
