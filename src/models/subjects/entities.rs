use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordMeta;

// 科目实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "subject.ts")]
pub struct Subject {
    #[serde(flatten)]
    #[ts(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub description: Option<String>,
}
