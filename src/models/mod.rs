pub mod auth;
pub mod common;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, ErrorCode, RecordMeta};
