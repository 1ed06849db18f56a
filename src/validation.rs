//! Input validation for task titles.
//!
//! Runs before the lifecycle engine is invoked; rejections surface to the
//! caller as structured field-level errors mapped to bad-request responses.

use crate::error::{FieldError, Result, TodoError};

/// Maximum title length in characters, measured after trimming.
pub const TITLE_MAX_LENGTH: usize = 100;

/// Validates a task title.
///
/// The trimmed title must be non-empty and at most [`TITLE_MAX_LENGTH`]
/// characters. Trimming applies only to the measurements here; the
/// untrimmed value is what gets stored and compared for uniqueness.
pub fn validate_title(title: &str) -> Result<()> {
    let trimmed = title.trim();
    let mut errors = Vec::new();

    if trimmed.is_empty() {
        errors.push(FieldError {
            field: "title",
            message: "Title is required".to_string(),
        });
    } else if trimmed.chars().count() > TITLE_MAX_LENGTH {
        errors.push(FieldError {
            field: "title",
            message: format!("Title cannot exceed {TITLE_MAX_LENGTH} characters"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TodoError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_titles() {
        assert!(validate_title("Buy milk").is_ok());
        assert!(validate_title("a").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_only_titles() {
        for title in ["", "   ", "\t\n"] {
            let err = validate_title(title).unwrap_err();
            match err {
                TodoError::Validation(errors) => {
                    assert_eq!(errors.len(), 1);
                    assert_eq!(errors[0].field, "title");
                    assert_eq!(errors[0].message, "Title is required");
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let exactly_max = "x".repeat(TITLE_MAX_LENGTH);
        assert!(validate_title(&exactly_max).is_ok());

        // Surrounding whitespace does not count against the limit.
        let padded = format!("   {exactly_max}   ");
        assert!(validate_title(&padded).is_ok());

        let too_long = "x".repeat(TITLE_MAX_LENGTH + 1);
        assert!(matches!(
            validate_title(&too_long),
            Err(TodoError::Validation(_))
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let multibyte = "é".repeat(TITLE_MAX_LENGTH);
        assert!(validate_title(&multibyte).is_ok());
    }
}
