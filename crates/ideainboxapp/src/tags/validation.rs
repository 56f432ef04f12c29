//! Note tag rules.
//!
//! A tag is one or more runs of `[a-z0-9]` joined by single hyphens:
//! `idea`, `quick-note`, `q3-planning`. Tags are kept without the `#` marker,
//! which is only added when rendering (see [`super::format_tag`]).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    #[error("tag is empty")]
    Empty,

    #[error("tag '{0}' has a leading, trailing or doubled hyphen")]
    MisplacedHyphen(String),

    #[error("tag '{tag}' contains '{ch}': use lowercase letters, digits and hyphens")]
    InvalidCharacter { tag: String, ch: char },
}

/// Checks that `tag` is a kebab-case tag.
///
/// ```
/// use ideainboxapp::tags::validation::validate_tag_name;
///
/// assert!(validate_tag_name("quick-note").is_ok());
/// assert!(validate_tag_name("2fa").is_ok());
/// assert!(validate_tag_name("#idea").is_err());
/// assert!(validate_tag_name("two--dashes").is_err());
/// ```
pub fn validate_tag_name(tag: &str) -> Result<(), TagValidationError> {
    if tag.is_empty() {
        return Err(TagValidationError::Empty);
    }
    if let Some(ch) = tag
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(TagValidationError::InvalidCharacter {
            tag: tag.to_string(),
            ch,
        });
    }
    // every hyphen-separated segment must be non-empty
    if tag.split('-').any(str::is_empty) {
        return Err(TagValidationError::MisplacedHyphen(tag.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tags_are_valid() {
        for tag in ["note", "idea", "quick-note", "detailed", "oct", "q3-planning"] {
            assert_eq!(validate_tag_name(tag), Ok(()), "{}", tag);
        }
    }

    #[test]
    fn test_hyphen_placement() {
        for tag in ["-idea", "idea-", "big--idea", "-"] {
            assert_eq!(
                validate_tag_name(tag),
                Err(TagValidationError::MisplacedHyphen(tag.to_string()))
            );
        }
    }

    #[test]
    fn test_first_bad_character_is_reported() {
        assert_eq!(
            validate_tag_name("Work_item"),
            Err(TagValidationError::InvalidCharacter {
                tag: "Work_item".to_string(),
                ch: 'W'
            })
        );
        let err = validate_tag_name("café").unwrap_err();
        assert!(err.to_string().contains("'é'"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_tag_name(""), Err(TagValidationError::Empty));
    }
}
