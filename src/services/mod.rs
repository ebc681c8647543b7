pub mod auth;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use auth::AuthService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;
