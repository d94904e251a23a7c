//! Storage accessor for the `student` table: a repository trait plus the
//! PostgreSQL implementation. Identifiers are fixed; values are always
//! bound as parameters.

use crate::error::AppError;
use crate::model::{Student, StudentRow};
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_COLUMNS: &str = "id, name, age, address, student_class, \
     date_of_birth, joining_date, created_at, updated_at";

/// CRUD primitives over the student table.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Student>, AppError>;
    async fn find_by_student_class(&self, student_class: i32) -> Result<Vec<Student>, AppError>;
    /// Insert when the row has no id, otherwise overwrite the row at that
    /// id. Returns the persisted row (with the generated id on insert).
    async fn save(&self, row: StudentRow) -> Result<Student, AppError>;
    /// No-op when the id does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        PgStudentRepository { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM student", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT {} FROM student WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM student WHERE name = $1", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, Student>(&sql)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_student_class(&self, student_class: i32) -> Result<Vec<Student>, AppError> {
        let sql = format!(
            "SELECT {} FROM student WHERE student_class = $1",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Student>(&sql)
            .bind(student_class)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn save(&self, row: StudentRow) -> Result<Student, AppError> {
        let student = match row.id {
            None => {
                let sql = format!(
                    "INSERT INTO student \
                     (name, age, address, student_class, date_of_birth, joining_date, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                     RETURNING {}",
                    SELECT_COLUMNS
                );
                sqlx::query_as::<_, Student>(&sql)
                    .bind(&row.name)
                    .bind(row.age)
                    .bind(&row.address)
                    .bind(row.student_class)
                    .bind(row.date_of_birth)
                    .bind(row.joining_date)
                    .bind(row.created_at)
                    .bind(row.updated_at)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                // Save-with-id overwrites the row at that id, inserting it
                // if it vanished in the meantime.
                let sql = format!(
                    "INSERT INTO student \
                     (id, name, age, address, student_class, date_of_birth, joining_date, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                     ON CONFLICT (id) DO UPDATE SET \
                     name = EXCLUDED.name, age = EXCLUDED.age, address = EXCLUDED.address, \
                     student_class = EXCLUDED.student_class, date_of_birth = EXCLUDED.date_of_birth, \
                     joining_date = EXCLUDED.joining_date, created_at = EXCLUDED.created_at, \
                     updated_at = EXCLUDED.updated_at \
                     RETURNING {}",
                    SELECT_COLUMNS
                );
                sqlx::query_as::<_, Student>(&sql)
                    .bind(id)
                    .bind(&row.name)
                    .bind(row.age)
                    .bind(&row.address)
                    .bind(row.student_class)
                    .bind(row.date_of_birth)
                    .bind(row.joining_date)
                    .bind(row.created_at)
                    .bind(row.updated_at)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(student)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
