use crate::error::{AppError, AppResult};
use regex::Regex;

/// Validate email shape (local@domain.tld)
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationError(
            "Invalid email address".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("userexample.com").is_err());
        assert!(validate_email("user @example.com").is_err());
        assert!(validate_email("").is_err());
    }
}
