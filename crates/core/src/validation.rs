//! Submission validator -- pure logic, no database access.
//!
//! All four field rules run independently, so every violated field is
//! reported in a single pass. The format rules check the raw submitted
//! string; only the presence rules trim first.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::student::StudentDraft;

/// 2 uppercase letters followed by 3 or more digits, e.g. `SV001`.
static STUDENT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{3,}$").expect("valid pattern"));

/// Minimal `local-part@domain` shape: at least one non-`@`, non-space
/// character before the `@` and at least one character after it.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@.+$").expect("valid pattern"));

/// The record field a validation error is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    StudentCode,
    FullName,
    Email,
    Major,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    TooShort,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Aggregated result of validating one submission.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    /// The error reported for `field`, if any. At most one error is
    /// produced per field.
    pub fn error_on(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validate a submitted draft.
///
/// Pure and deterministic: the same draft always yields the same result,
/// and no field short-circuits another.
pub fn validate(draft: &StudentDraft) -> ValidationResult {
    let mut errors = Vec::new();

    let code = draft.student_code.as_deref();
    if is_blank(code) {
        errors.push(FieldError {
            field: Field::StudentCode,
            kind: ErrorKind::Required,
            message: "Student code is required.",
        });
    } else if !STUDENT_CODE_PATTERN.is_match(code.unwrap_or_default()) {
        errors.push(FieldError {
            field: Field::StudentCode,
            kind: ErrorKind::InvalidFormat,
            message: "Invalid format. Use 2 letters + 3+ digits (e.g., SV001)",
        });
    }

    let name = draft.full_name.as_deref();
    if is_blank(name) {
        errors.push(FieldError {
            field: Field::FullName,
            kind: ErrorKind::Required,
            message: "Full name is required.",
        });
    } else if name.unwrap_or_default().trim().chars().count() < 2 {
        errors.push(FieldError {
            field: Field::FullName,
            kind: ErrorKind::TooShort,
            message: "Full name must be at least 2 characters.",
        });
    }

    // Email is optional: only checked when present and non-blank.
    if let Some(email) = draft.email.as_deref() {
        if !email.trim().is_empty() && !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError {
                field: Field::Email,
                kind: ErrorKind::InvalidFormat,
                message: "Invalid email format.",
            });
        }
    }

    if is_blank(draft.major.as_deref()) {
        errors.push(FieldError {
            field: Field::Major,
            kind: ErrorKind::Required,
            message: "Major is required.",
        });
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> StudentDraft {
        StudentDraft {
            student_code: Some("SV001".to_string()),
            full_name: Some("Anna Lee".to_string()),
            email: Some("anna@example.com".to_string()),
            major: Some("CS".to_string()),
        }
    }

    #[test]
    fn accepts_fully_valid_draft() {
        let result = validate(&valid_draft());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn student_code_required_when_missing_or_blank() {
        for code in [None, Some("".to_string()), Some("   ".to_string())] {
            let mut draft = valid_draft();
            draft.student_code = code;
            let result = validate(&draft);
            assert!(!result.is_valid);
            let err = result.error_on(Field::StudentCode).unwrap();
            assert_eq!(err.kind, ErrorKind::Required);
        }
    }

    #[test]
    fn student_code_format_rejects_bad_shapes() {
        for code in ["sv001", "SV01", "S1234", "SV00a", "1SV001", "SVXXX"] {
            let mut draft = valid_draft();
            draft.student_code = Some(code.to_string());
            let result = validate(&draft);
            let err = result.error_on(Field::StudentCode).unwrap();
            assert_eq!(err.kind, ErrorKind::InvalidFormat, "code {code:?}");
        }
    }

    #[test]
    fn student_code_format_checks_raw_string() {
        // Passes the presence check after trim, but the format rule sees
        // the raw value and rejects the surrounding whitespace.
        let mut draft = valid_draft();
        draft.student_code = Some(" SV001 ".to_string());
        let result = validate(&draft);
        let err = result.error_on(Field::StudentCode).unwrap();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
    }

    #[test]
    fn student_code_accepts_long_digit_runs() {
        let mut draft = valid_draft();
        draft.student_code = Some("SV0012345".to_string());
        assert!(validate(&draft).is_valid);
    }

    #[test]
    fn full_name_required_and_min_length() {
        let mut draft = valid_draft();
        draft.full_name = None;
        let result = validate(&draft);
        assert_eq!(
            result.error_on(Field::FullName).unwrap().kind,
            ErrorKind::Required
        );

        draft.full_name = Some("A".to_string());
        let result = validate(&draft);
        assert_eq!(
            result.error_on(Field::FullName).unwrap().kind,
            ErrorKind::TooShort
        );

        // Length is measured after trimming.
        draft.full_name = Some(" A ".to_string());
        let result = validate(&draft);
        assert_eq!(
            result.error_on(Field::FullName).unwrap().kind,
            ErrorKind::TooShort
        );

        draft.full_name = Some("Al".to_string());
        assert!(validate(&draft).is_valid);
    }

    #[test]
    fn email_skipped_when_missing_or_blank() {
        for email in [None, Some("".to_string()), Some("   ".to_string())] {
            let mut draft = valid_draft();
            draft.email = email;
            let result = validate(&draft);
            assert!(result.is_valid);
            assert!(result.error_on(Field::Email).is_none());
        }
    }

    #[test]
    fn email_format_rejected_when_present() {
        for email in ["not-an-email", "@example.com", "anna@", "a b@example.com"] {
            let mut draft = valid_draft();
            draft.email = Some(email.to_string());
            let result = validate(&draft);
            let err = result.error_on(Field::Email).unwrap();
            assert_eq!(err.kind, ErrorKind::InvalidFormat, "email {email:?}");
        }
    }

    #[test]
    fn major_required() {
        let mut draft = valid_draft();
        draft.major = Some("  ".to_string());
        let result = validate(&draft);
        assert_eq!(
            result.error_on(Field::Major).unwrap().kind,
            ErrorKind::Required
        );
    }

    #[test]
    fn all_violated_fields_reported_in_one_pass() {
        let draft = StudentDraft {
            student_code: Some("sv1".to_string()),
            full_name: Some("A".to_string()),
            email: None,
            major: Some("CS".to_string()),
        };
        let result = validate(&draft);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(
            result.error_on(Field::StudentCode).unwrap().kind,
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            result.error_on(Field::FullName).unwrap().kind,
            ErrorKind::TooShort
        );
        assert!(result.error_on(Field::Major).is_none());
    }

    #[test]
    fn invalid_code_reported_regardless_of_other_fields() {
        let draft = StudentDraft {
            student_code: Some("nope".to_string()),
            full_name: None,
            email: Some("broken".to_string()),
            major: None,
        };
        let result = validate(&draft);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 4);
        assert_eq!(
            result.error_on(Field::StudentCode).unwrap().kind,
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let draft = StudentDraft {
            student_code: Some("sv1".to_string()),
            full_name: Some("A".to_string()),
            email: Some("broken".to_string()),
            major: None,
        };
        let first = validate(&draft);
        let second = validate(&draft);
        assert_eq!(first.is_valid, second.is_valid);
        assert_eq!(first.errors.len(), second.errors.len());
        for (a, b) in first.errors.iter().zip(second.errors.iter()) {
            assert_eq!(a.field, b.field);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.message, b.message);
        }
    }
}
