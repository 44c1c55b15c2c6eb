/// Prompt serial numbers are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Operator-supplied image identifier.
pub type ImageId = i64;
