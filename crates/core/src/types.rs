/// All database primary keys are PostgreSQL identity `BIGINT` columns.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
