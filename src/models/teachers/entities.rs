use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordMeta;

// 教师实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "teacher.ts")]
pub struct Teacher {
    #[serde(flatten)]
    #[ts(flatten)]
    pub meta: RecordMeta,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub department: String,
}
