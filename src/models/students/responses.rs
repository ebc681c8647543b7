use super::entities::Student;
use serde::Serialize;
use ts_rs::TS;

// 学生响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentResponse {
    pub student: Student,
}

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentListResponse {
    pub items: Vec<Student>,
}
