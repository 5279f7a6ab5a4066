//! Repository for the `students` table.
//!
//! [`Student`] is a plain value object owned by `roster_core`, so rows
//! are mapped by hand instead of deriving `FromRow` (the core crate has
//! no sqlx dependency).

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use roster_core::student::{NewStudent, Student};
use roster_core::types::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_code, full_name, email, major";

fn student_from_row(row: PgRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        id: row.try_get("id")?,
        student_code: row.try_get("student_code")?,
        full_name: row.try_get("full_name")?,
        email: row.try_get("email")?,
        major: row.try_get("major")?,
    })
}

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Return the full roster snapshot in insertion (id) order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        sqlx::query(&query)
            .try_map(student_from_row)
            .fetch_all(pool)
            .await
    }

    /// Find a student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query(&query)
            .bind(id)
            .try_map(student_from_row)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new student, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (student_code, full_name, email, major)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query(&query)
            .bind(&input.student_code)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.major)
            .try_map(student_from_row)
            .fetch_one(pool)
            .await
    }

    /// Replace a student's writable fields, keeping its id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                student_code = $2,
                full_name = $3,
                email = $4,
                major = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query(&query)
            .bind(id)
            .bind(&input.student_code)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.major)
            .try_map(student_from_row)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
