//! Request handlers.
//!
//! Handlers are thin: they parse parameters, run the validator or query
//! shaper from `roster_core`, delegate persistence to `roster_db`, and
//! map errors via [`crate::error::AppError`]. No decision logic lives
//! here beyond the validation gate (invalid submissions never reach the
//! store).

pub mod student;
