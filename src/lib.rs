//! Student service: CRUD REST backend over one PostgreSQL table.

pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{Student, StudentRecord, StudentRow};
pub use repository::{PgStudentRepository, StudentRepository};
pub use routes::{common_routes_with_ready, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_student_table};
