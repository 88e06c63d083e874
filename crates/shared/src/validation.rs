//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a category name, in characters. Used by
/// `#[validate(length(max = ...))]` on the category payloads.
pub const MAX_CATEGORIA_NAME_LENGTH: u64 = 150;

/// Maximum length of a task title, in characters.
pub const MAX_TAREA_TITLE_LENGTH: u64 = 200;

/// Validates that a required text field is not made up only of whitespace.
///
/// Length bounds are checked separately with `#[validate(length(...))]`; this
/// rule catches values like `"   "` that pass a `min = 1` length check.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Word;
    use fake::Fake;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Trabajo").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_validate_not_blank_random_words() {
        for _ in 0..20 {
            let word: String = Word().fake();
            assert!(validate_not_blank(&word).is_ok());
        }
    }

    #[test]
    fn test_validate_not_blank_message() {
        let err = validate_not_blank("").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.unwrap(), "Value must not be blank");
    }
}
