//! API handlers and shared utilities.
//!
//! Each credential endpoint follows the same shape: authenticate, validate
//! the typed payload, make exactly one authority call, map the outcome.

pub mod auth;
pub mod health;
pub mod password;
pub mod reset_link;
pub mod root;

use regex::Regex;

/// Lightweight email sanity check used before reaching the authority.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_simple() {
        assert!(valid_email("user@example.com"));
    }

    #[test]
    fn valid_email_rejects_missing_at() {
        assert!(!valid_email("user.example.com"));
    }

    #[test]
    fn valid_email_rejects_whitespace() {
        assert!(!valid_email("user @example.com"));
    }
}
