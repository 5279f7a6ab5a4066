//! Shared response envelope types for API handlers.
//!
//! List responses carry the echoed request parameters (search keyword,
//! sort column and direction, selected major) alongside `data` so the
//! client can re-render its own inputs without extra round trips.

use serde::Serialize;

use roster_core::student::{Student, StudentDraft};
use roster_core::validation::FieldError;

/// Standard list envelope plus echoed query parameters.
///
/// Echo fields are only serialized for the operation that produced them;
/// a plain listing carries `data` alone.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentList {
    pub data: Vec<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_major: Option<String>,
}

impl StudentList {
    /// A plain listing with no echoed parameters.
    pub fn plain(data: Vec<Student>) -> Self {
        Self {
            data,
            keyword: None,
            sort_by: None,
            order: None,
            selected_major: None,
        }
    }
}

/// A rejected create/update submission: the per-field errors together
/// with the entered values, so the form can be redisplayed without
/// losing user input. Nothing is persisted.
#[derive(Debug, Serialize)]
pub struct RejectedSubmission {
    pub errors: Vec<FieldError>,
    pub student: StudentDraft,
}
