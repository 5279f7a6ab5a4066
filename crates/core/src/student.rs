//! Student record types.
//!
//! A record moves through three shapes: [`StudentDraft`] (raw submission,
//! every writable field an `Option<String>`), [`NewStudent`] (validated
//! write payload), and [`Student`] (persisted row with a store-assigned
//! id). The id never comes from the client: the store assigns it on
//! create and the URL path supplies it on update.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A persisted student record. Plain value object; never mutated after
/// validation -- an edit builds a fresh validated record carrying the
/// existing id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub student_code: String,
    pub full_name: String,
    pub email: Option<String>,
    pub major: String,
}

/// An unvalidated submission as it arrives from the form.
///
/// Absent and empty fields both deserialize into `Option`, so the rest of
/// the core never branches on null-vs-empty beyond the trim-and-check
/// rules in [`crate::validation`]. Serializes back out so a rejected
/// submission can be redisplayed with the entered values intact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub student_code: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

/// The validated write payload handed to the store for create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub student_code: String,
    pub full_name: String,
    pub email: Option<String>,
    pub major: String,
}

impl StudentDraft {
    /// Convert a draft into a write payload.
    ///
    /// Only meaningful after [`crate::validation::validate`] has accepted
    /// the draft; missing fields fall back to empty strings so the
    /// conversion stays total. A blank email is normalized to `None`.
    pub fn to_record(&self) -> NewStudent {
        let email = self
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .map(str::to_owned);

        NewStudent {
            student_code: self.student_code.clone().unwrap_or_default(),
            full_name: self.full_name.clone().unwrap_or_default(),
            email,
            major: self.major.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> StudentDraft {
        StudentDraft {
            student_code: Some("SV001".to_string()),
            full_name: Some("Anna Lee".to_string()),
            email: Some("anna@example.com".to_string()),
            major: Some("CS".to_string()),
        }
    }

    #[test]
    fn to_record_keeps_submitted_values() {
        let record = draft().to_record();
        assert_eq!(record.student_code, "SV001");
        assert_eq!(record.full_name, "Anna Lee");
        assert_eq!(record.email.as_deref(), Some("anna@example.com"));
        assert_eq!(record.major, "CS");
    }

    #[test]
    fn blank_email_normalizes_to_none() {
        let mut d = draft();
        d.email = Some("".to_string());
        assert_eq!(d.to_record().email, None);

        d.email = Some("   ".to_string());
        assert_eq!(d.to_record().email, None);

        d.email = None;
        assert_eq!(d.to_record().email, None);
    }

    #[test]
    fn draft_deserializes_camel_case_with_missing_fields() {
        let d: StudentDraft =
            serde_json::from_str(r#"{"studentCode":"SV001","fullName":"Anna"}"#).unwrap();
        assert_eq!(d.student_code.as_deref(), Some("SV001"));
        assert_eq!(d.full_name.as_deref(), Some("Anna"));
        assert_eq!(d.email, None);
        assert_eq!(d.major, None);
    }
}
