use super::entities::Teacher;
use serde::Serialize;
use ts_rs::TS;

// 教师响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherResponse {
    pub teacher: Teacher,
}

// 教师列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
}
