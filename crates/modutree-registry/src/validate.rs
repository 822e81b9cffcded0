//! Pure slug format validation.

use crate::error::SlugError;

/// Minimum slug length in characters.
pub const SLUG_MIN_LEN: usize = 3;
/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 20;

/// Validate a slug against the format rules: lowercase ascii letters,
/// digits, and hyphens only, 3–20 characters.
///
/// Charset is checked before length so that a slug failing both rules
/// reports the charset message, matching the product UI.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    let charset_ok = slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !charset_ok {
        return Err(SlugError::InvalidCharset);
    }
    if slug.len() < SLUG_MIN_LEN || slug.len() > SLUG_MAX_LEN {
        return Err(SlugError::InvalidLength);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        for slug in ["abc", "my-site", "site-2024", "a1-b2-c3"] {
            assert_eq!(validate_slug(slug), Ok(()), "{slug} should be valid");
        }
    }

    #[test]
    fn rejects_bad_charset() {
        for slug in ["My-Site", "site_1", "한글주소", "with space", "emoji🙂"] {
            assert_eq!(validate_slug(slug), Err(SlugError::InvalidCharset));
        }
    }

    #[test]
    fn rejects_bad_length() {
        let too_short = "a".repeat(SLUG_MIN_LEN - 1);
        let too_long = "a".repeat(SLUG_MAX_LEN + 1);
        assert_eq!(validate_slug(&too_short), Err(SlugError::InvalidLength));
        assert_eq!(validate_slug(""), Err(SlugError::InvalidLength));
        assert_eq!(validate_slug(&too_long), Err(SlugError::InvalidLength));
    }

    #[test]
    fn accepts_length_boundaries() {
        assert_eq!(validate_slug(&"a".repeat(SLUG_MIN_LEN)), Ok(()));
        assert_eq!(validate_slug(&"a".repeat(SLUG_MAX_LEN)), Ok(()));
    }

    #[test]
    fn charset_reported_before_length() {
        // "A!" fails both rules; the charset message wins.
        assert_eq!(validate_slug("A!"), Err(SlugError::InvalidCharset));
    }
}
