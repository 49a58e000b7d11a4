/// All database primary keys are PostgreSQL BIGSERIAL (city ids come from
/// the geonames dump but share the same width).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
