use serde::Deserialize;
use ts_rs::TS;

// 科目创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// 科目更新请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}
