//! Resource service: timestamp stamping and not-found handling between
//! the HTTP handlers and the storage accessor. Absence is an `Option` or
//! an empty `Vec` here, never an error.

use crate::error::AppError;
use crate::model::{Student, StudentRecord, StudentRow};
use crate::repository::StudentRepository;
use chrono::Utc;
use std::sync::Arc;

pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        StudentService { repo }
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let student = self.repo.find_by_id(id).await?;
        if student.is_none() {
            tracing::info!(id, "student with id doesn't exist");
        }
        Ok(student)
    }

    pub async fn get_student_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
        let students = self.repo.find_by_name(name).await?;
        if students.is_empty() {
            tracing::info!(name, "student with name doesn't exist");
        }
        Ok(students)
    }

    pub async fn get_student_by_class(
        &self,
        student_class: i32,
    ) -> Result<Vec<Student>, AppError> {
        let students = self.repo.find_by_student_class(student_class).await?;
        if students.is_empty() {
            tracing::info!(student_class, "no students in class");
        }
        Ok(students)
    }

    /// Persist a new or caller-identified record. Both timestamps are set
    /// to now; anything the caller supplied for them is discarded.
    pub async fn save_student(&self, record: StudentRecord) -> Result<Student, AppError> {
        let now = Utc::now();
        let saved = self.repo.save(StudentRow::from_record(record, now, now)).await?;
        tracing::info!(id = saved.id, "student saved");
        Ok(saved)
    }

    /// Update an existing record by the id on the input. The original
    /// `created_at` is carried over; `updated_at` is refreshed. Returns
    /// `None` when no row exists for that id.
    pub async fn update_student(
        &self,
        record: StudentRecord,
    ) -> Result<Option<Student>, AppError> {
        let id = record
            .id
            .ok_or_else(|| AppError::BadRequest("update requires an id".into()))?;
        let existing = match self.repo.find_by_id(id).await? {
            Some(s) => s,
            None => {
                tracing::error!(id, "student with id doesn't exist");
                return Ok(None);
            }
        };
        let row = StudentRow::from_record(record, existing.created_at, Utc::now());
        let updated = self.repo.save(row).await?;
        tracing::info!(id, "student updated");
        Ok(Some(updated))
    }

    pub async fn delete_student_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository standing in for PostgreSQL.
    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<HashMap<i64, Student>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryRepo {
        fn assign_id(&self) -> i64 {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        }
    }

    #[async_trait]
    impl StudentRepository for InMemoryRepo {
        async fn find_all(&self) -> Result<Vec<Student>, AppError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|s| s.name == name)
                .cloned()
                .collect())
        }

        async fn find_by_student_class(
            &self,
            student_class: i32,
        ) -> Result<Vec<Student>, AppError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|s| s.student_class == student_class)
                .cloned()
                .collect())
        }

        async fn save(&self, row: StudentRow) -> Result<Student, AppError> {
            let id = row.id.unwrap_or_else(|| self.assign_id());
            let student = Student {
                id,
                name: row.name,
                age: row.age,
                address: row.address,
                student_class: row.student_class,
                date_of_birth: row.date_of_birth,
                joining_date: row.joining_date,
                created_at: row.created_at,
                updated_at: row.updated_at,
            };
            self.rows.lock().unwrap().insert(id, student.clone());
            Ok(student)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    fn service() -> StudentService {
        StudentService::new(Arc::new(InMemoryRepo::default()))
    }

    fn record(name: &str, age: i32, student_class: i32) -> StudentRecord {
        StudentRecord {
            id: None,
            name: name.to_string(),
            age,
            address: None,
            student_class,
            date_of_birth: None,
            joining_date: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_equal_timestamps() {
        let svc = service();
        let saved = svc.save_student(record("Alice", 10, 5)).await.unwrap();
        assert!(saved.id > 0);
        assert_eq!(saved.created_at, saved.updated_at);
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_refreshes_updated_at() {
        let svc = service();
        let saved = svc.save_student(record("Bob", 11, 6)).await.unwrap();

        let mut change = record("Bob", 12, 6);
        change.id = Some(saved.id);
        let updated = svc.update_student(change).await.unwrap().unwrap();

        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at >= saved.updated_at);
        assert_eq!(updated.age, 12);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none_and_leaves_storage_unchanged() {
        let svc = service();
        let saved = svc.save_student(record("Carol", 9, 4)).await.unwrap();

        let mut change = record("Intruder", 99, 1);
        change.id = Some(saved.id + 1000);
        let result = svc.update_student(change).await.unwrap();
        assert!(result.is_none());

        let all = svc.get_all_students().await.unwrap();
        assert_eq!(all, vec![saved]);
    }

    #[tokio::test]
    async fn update_without_id_is_a_bad_request() {
        let svc = service();
        let err = svc.update_student(record("NoId", 1, 1)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn delete_twice_does_not_fault() {
        let svc = service();
        let saved = svc.save_student(record("Dave", 8, 3)).await.unwrap();
        svc.delete_student_by_id(saved.id).await.unwrap();
        svc.delete_student_by_id(saved.id).await.unwrap();
        assert!(svc.get_student_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_on_empty_storage_is_empty() {
        let svc = service();
        assert!(svc.get_all_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookups_miss_as_absent_not_error() {
        let svc = service();
        assert!(svc.get_student_by_id(42).await.unwrap().is_none());
        assert!(svc.get_student_by_name("nobody").await.unwrap().is_empty());
        assert!(svc.get_student_by_class(12).await.unwrap().is_empty());
    }
}
