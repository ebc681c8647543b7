use serde::Serialize;

/// 业务错误码
///
/// 0 表示成功；1xxx 通用错误；2xxx 用户；3xxx 学生；4xxx 科目；5xxx 教师。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserEmailInvalid = 2003,
    UserPasswordInvalid = 2004,
    UserCreationFailed = 2005,
    UserUpdateFailed = 2006,
    UserDeleteFailed = 2007,

    // 学生
    StudentNotFound = 3001,
    StudentCreationFailed = 3002,
    StudentUpdateFailed = 3003,
    StudentDeleteFailed = 3004,

    // 科目
    SubjectNotFound = 4001,
    SubjectCreationFailed = 4002,
    SubjectUpdateFailed = 4003,
    SubjectDeleteFailed = 4004,

    // 教师
    TeacherNotFound = 5001,
    TeacherCreationFailed = 5002,
    TeacherUpdateFailed = 5003,
    TeacherDeleteFailed = 5004,
}
