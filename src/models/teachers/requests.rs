use serde::Deserialize;
use ts_rs::TS;

// 教师创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "teacher.ts")]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub department: String,
}

// 教师更新请求，未提供的字段保持不变
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "teacher.ts")]
pub struct UpdateTeacherRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub department: Option<String>,
}
