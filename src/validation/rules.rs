//! Per-field validators
//!
//! Each validator is a pure function from the raw field text to a [`Verdict`].
//! Input is taken exactly as typed: no trimming, no normalization. Length
//! checks count characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dob::{validate_dob, DobPolicy};

/// Minimum name length in characters
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum name length in characters
pub const NAME_MAX_CHARS: usize = 25;

/// Only Farmingdale addresses are accepted; the domain literal is
/// case-sensitive
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@farmingdale\.edu$").unwrap());

static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").unwrap());

/// Validity result for one field's current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: &'static str,
}

impl Verdict {
    /// Marker shown next to a field that validated successfully
    pub const VALID_MARK: &'static str = "✓";

    pub fn pass() -> Self {
        Self {
            valid: true,
            message: Self::VALID_MARK,
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

/// Identifies one of the five registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Dob,
    ZipCode,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 5] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Dob,
        FieldId::ZipCode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Dob => "Date of Birth",
            Self::ZipCode => "Zip Code",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "Enter your first name",
            Self::LastName => "Enter your last name",
            Self::Email => "Enter your email",
            Self::Dob => "MM/DD/YYYY",
            Self::ZipCode => "Enter your zip code",
        }
    }

    /// Snake-case identifier for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::ZipCode => "zip_code",
        }
    }
}

/// Validate a first or last name: 2 to 25 characters, anything goes
pub fn validate_name(text: &str) -> Verdict {
    let len = text.chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        Verdict::pass()
    } else {
        Verdict::fail("Invalid (2-25 chars)")
    }
}

/// Validate an email address against the Farmingdale domain
pub fn validate_email(text: &str) -> Verdict {
    if EMAIL_RE.is_match(text) {
        Verdict::pass()
    } else {
        Verdict::fail("Invalid email")
    }
}

/// Validate a zip code: exactly five ASCII digits
pub fn validate_zip_code(text: &str) -> Verdict {
    if ZIP_RE.is_match(text) {
        Verdict::pass()
    } else {
        Verdict::fail("Invalid zip code")
    }
}

/// Dispatch to the validator for a field
pub fn validate_field(id: FieldId, text: &str, policy: DobPolicy) -> Verdict {
    match id {
        FieldId::FirstName | FieldId::LastName => validate_name(text),
        FieldId::Email => validate_email(text),
        FieldId::Dob => validate_dob(text, policy),
        FieldId::ZipCode => validate_zip_code(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_invalid() {
            assert!(!validate_name("").valid);
        }

        #[test]
        fn test_single_char_is_invalid() {
            assert!(!validate_name("a").valid);
        }

        #[test]
        fn test_min_length_is_valid() {
            assert!(validate_name("ab").valid);
        }

        #[test]
        fn test_max_length_is_valid() {
            assert!(validate_name(&"a".repeat(25)).valid);
        }

        #[test]
        fn test_over_max_length_is_invalid() {
            let verdict = validate_name(&"a".repeat(26));
            assert!(!verdict.valid);
            assert_eq!(verdict.message, "Invalid (2-25 chars)");
        }

        #[test]
        fn test_whitespace_counts_toward_length() {
            // No trimming: " ab" is three characters
            assert!(validate_name(" ab").valid);
            assert!(validate_name(" a").valid);
            assert!(!validate_name(" ").valid);
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            // Two chars, six bytes
            assert!(validate_name("éé").valid);
        }

        #[test]
        fn test_any_characters_allowed() {
            assert!(validate_name("O'Brien-Smith").valid);
            assert!(validate_name("12345").valid);
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_farmingdale_address_is_valid() {
            let verdict = validate_email("a@farmingdale.edu");
            assert!(verdict.valid);
            assert_eq!(verdict.message, Verdict::VALID_MARK);
        }

        #[test]
        fn test_full_local_part_is_valid() {
            assert!(validate_email("first.last+tag%x_y-z@farmingdale.edu").valid);
        }

        #[test]
        fn test_other_domain_is_invalid() {
            let verdict = validate_email("a@gmail.com");
            assert!(!verdict.valid);
            assert_eq!(verdict.message, "Invalid email");
        }

        #[test]
        fn test_trailing_domain_suffix_is_invalid() {
            assert!(!validate_email("a@farmingdale.edu.com").valid);
        }

        #[test]
        fn test_empty_local_part_is_invalid() {
            assert!(!validate_email("@farmingdale.edu").valid);
        }

        #[test]
        fn test_domain_is_case_sensitive() {
            assert!(!validate_email("a@Farmingdale.edu").valid);
            assert!(!validate_email("a@FARMINGDALE.EDU").valid);
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(!validate_email("").valid);
        }
    }

    mod zip_code {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_five_digits_is_valid() {
            assert!(validate_zip_code("12345").valid);
        }

        #[test]
        fn test_four_digits_is_invalid() {
            assert!(!validate_zip_code("1234").valid);
        }

        #[test]
        fn test_six_digits_is_invalid() {
            assert!(!validate_zip_code("123456").valid);
        }

        #[test]
        fn test_trailing_letter_is_invalid() {
            let verdict = validate_zip_code("12345a");
            assert!(!verdict.valid);
            assert_eq!(verdict.message, "Invalid zip code");
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(!validate_zip_code("").valid);
        }
    }

    mod dispatch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_dispatch_routes_by_field() {
            let policy = DobPolicy::default();
            assert!(validate_field(FieldId::FirstName, "ab", policy).valid);
            assert!(validate_field(FieldId::LastName, "cd", policy).valid);
            assert!(validate_field(FieldId::Email, "a@farmingdale.edu", policy).valid);
            assert!(validate_field(FieldId::Dob, "01/02/2020", policy).valid);
            assert!(validate_field(FieldId::ZipCode, "12345", policy).valid);
        }

        #[test]
        fn test_empty_string_fails_every_field() {
            let policy = DobPolicy::default();
            for id in FieldId::ALL {
                assert!(!validate_field(id, "", policy).valid, "{:?}", id);
            }
        }

        #[test]
        fn test_validators_are_idempotent() {
            let policy = DobPolicy::default();
            for (id, text) in [
                (FieldId::FirstName, "ab"),
                (FieldId::Email, "nope"),
                (FieldId::Dob, "01/02/2020"),
                (FieldId::ZipCode, "12345a"),
            ] {
                let first = validate_field(id, text, policy);
                let second = validate_field(id, text, policy);
                assert_eq!(first, second);
            }
        }
    }

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_has_five_fields_in_display_order() {
            assert_eq!(FieldId::ALL.len(), 5);
            assert_eq!(FieldId::ALL[0], FieldId::FirstName);
            assert_eq!(FieldId::ALL[4], FieldId::ZipCode);
        }

        #[test]
        fn test_labels_and_placeholders_are_distinct() {
            for id in FieldId::ALL {
                assert!(!id.label().is_empty());
                assert!(!id.placeholder().is_empty());
            }
            assert_eq!(FieldId::Dob.placeholder(), "MM/DD/YYYY");
        }
    }
}
