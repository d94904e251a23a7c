//! Shared application state for all routes.

use crate::service::StudentService;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub service: Arc<StudentService>,
}

impl AppState {
    /// State backed by the PostgreSQL repository over `pool`.
    pub fn new(pool: PgPool) -> Self {
        let repo = Arc::new(crate::repository::PgStudentRepository::new(pool.clone()));
        AppState {
            pool,
            service: Arc::new(StudentService::new(repo)),
        }
    }
}
