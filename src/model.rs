//! The Student entity: one struct per table row, plus the unsaved form
//! accepted in request bodies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A persisted student row. JSON field names follow the wire contract
/// (`studentClass`, `dateOfBirth`, ...), column names stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
    pub student_class: i32,
    pub date_of_birth: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request-body form of a student. `id` is absent on create and required
/// on update. Timestamps are deliberately not deserialized: the service
/// stamps them itself, so caller-supplied values are dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub age: i32,
    pub address: Option<String>,
    #[serde(default)]
    pub student_class: i32,
    pub date_of_birth: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
}

/// Write-side row handed to the storage accessor: record fields plus the
/// timestamps the service decided on.
#[derive(Debug, Clone)]
pub struct StudentRow {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
    pub student_class: i32,
    pub date_of_birth: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentRow {
    /// Combine a request record with explicit timestamps.
    pub fn from_record(
        record: StudentRecord,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        StudentRow {
            id: record.id,
            name: record.name,
            age: record.age,
            address: record.address,
            student_class: record.student_class,
            date_of_birth: record.date_of_birth,
            joining_date: record.joining_date,
            created_at,
            updated_at,
        }
    }
}
