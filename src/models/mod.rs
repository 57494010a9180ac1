//! Data models for Critica

pub mod author;
pub mod category;
pub mod content;
pub mod review;
pub mod user;

use once_cell::sync::Lazy;
use regex::Regex;

// Re-export commonly used types
pub use author::Author;
pub use category::Category;
pub use content::{Content, ContentDetail};
pub use review::{Review, ReviewDetail};
pub use user::User;

/// Character rule shared by category names and content descriptions:
/// letters, digits and spaces only.
pub(crate) static ALPHANUMERIC_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("valid regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_rule_accepts_letters_digits_spaces() {
        assert!(ALPHANUMERIC_SPACE.is_match("Science Fiction 2"));
        assert!(!ALPHANUMERIC_SPACE.is_match("Sci-Fi"));
        assert!(!ALPHANUMERIC_SPACE.is_match("Drame & Comedie"));
        assert!(!ALPHANUMERIC_SPACE.is_match(""));
    }
}
