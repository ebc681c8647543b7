use super::entities::Subject;
use serde::Serialize;
use ts_rs::TS;

// 科目响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct SubjectResponse {
    pub subject: Subject,
}

// 科目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
}
