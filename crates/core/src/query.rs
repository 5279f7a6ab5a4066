//! Query shaping -- pure functions over the store's read-all snapshot.
//!
//! Search, sort, and filter-by-major are three independent
//! single-parameter operations (deliberately not composable; the form
//! submits one at a time). Each returns the shaped records together with
//! the echoed request parameters, so the boundary layer can re-render the
//! caller's own inputs without the core knowing about rendering.

use crate::student::Student;

/// A recognized sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    StudentCode,
    FullName,
    Email,
    Major,
}

impl SortKey {
    /// Parse the request's `sortBy` value. Anything outside the allowed
    /// set is `None`, which means "keep the store's natural order".
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "studentCode" => Some(SortKey::StudentCode),
            "fullName" => Some(SortKey::FullName),
            "email" => Some(SortKey::Email),
            "major" => Some(SortKey::Major),
            _ => None,
        }
    }

    /// The field's string representation used for comparison. A missing
    /// email compares as the empty string.
    fn field_of<'a>(&self, student: &'a Student) -> &'a str {
        match self {
            SortKey::StudentCode => &student.student_code,
            SortKey::FullName => &student.full_name,
            SortKey::Email => student.email.as_deref().unwrap_or(""),
            SortKey::Major => &student.major,
        }
    }
}

/// Result of a keyword search plus the echoed keyword.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub records: Vec<Student>,
    /// Normalized to `""` when the request had no usable keyword, so the
    /// search box re-renders empty instead of showing a literal null.
    pub keyword: String,
}

/// Result of a sorted listing plus the echoed request parameters.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    pub records: Vec<Student>,
    /// Echoed verbatim, even when unrecognized.
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Result of a major filter plus the echoed selection.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub records: Vec<Student>,
    pub selected_major: Option<String>,
}

/// Case-sensitive substring search across all searchable text fields.
///
/// A missing or blank keyword returns the full set unfiltered with an
/// echoed keyword of `""`. A usable keyword is trimmed before matching
/// but echoed as submitted.
pub fn search(records: Vec<Student>, keyword: Option<&str>) -> SearchOutcome {
    let raw = keyword.unwrap_or("");
    let needle = raw.trim();

    if needle.is_empty() {
        return SearchOutcome {
            records,
            keyword: String::new(),
        };
    }

    let records = records
        .into_iter()
        .filter(|s| {
            s.student_code.contains(needle)
                || s.full_name.contains(needle)
                || s.major.contains(needle)
                || s.email.as_deref().is_some_and(|e| e.contains(needle))
        })
        .collect();

    SearchOutcome {
        records,
        keyword: raw.to_string(),
    }
}

/// Order the records by the requested column.
///
/// Case-sensitive lexical ascending sort, stable so ties keep the store's
/// natural order. `order` equal to exactly `"desc"` reverses the
/// ascending result; anything else means ascending. An unrecognized or
/// missing `sort_by` leaves the records in natural order, while the
/// requested parameters are still echoed back for UI state.
pub fn sorted(records: Vec<Student>, sort_by: Option<&str>, order: Option<&str>) -> SortOutcome {
    let mut records = records;

    if let Some(key) = sort_by.and_then(SortKey::parse) {
        records.sort_by(|a, b| key.field_of(a).cmp(key.field_of(b)));
        if order == Some("desc") {
            records.reverse();
        }
    }

    SortOutcome {
        records,
        sort_by: sort_by.map(str::to_owned),
        order: order.map(str::to_owned),
    }
}

/// Keep only records whose major exactly equals the selection
/// (case-sensitive). A missing or blank major means "no filter".
pub fn filter_by_major(records: Vec<Student>, major: Option<&str>) -> FilterOutcome {
    let selected_major = major.map(str::to_owned);

    let records = match major {
        Some(m) if !m.trim().is_empty() => {
            records.into_iter().filter(|s| s.major == m).collect()
        }
        _ => records,
    };

    FilterOutcome {
        records,
        selected_major,
    }
}
