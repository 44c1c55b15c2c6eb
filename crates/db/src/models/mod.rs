//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct mirroring the raw columns
//! - A validated domain struct converted from it with `TryFrom`
//! - Input DTOs for inserts and updates

pub mod image_review;
pub mod prompt;

/// Wrap a domain validation failure as a column decode error so stored
/// values outside the domain surface as database errors.
pub(crate) fn decode_error(column: &str, err: moodboard_core::error::CoreError) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(err),
    }
}
