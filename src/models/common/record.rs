use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 所有记录共有的标识、时间戳与软删除标记
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "record.ts")]
pub struct RecordMeta {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    /// 由数据库中的秒级时间戳构建
    pub fn from_timestamps(
        id: i64,
        created_at: i64,
        updated_at: i64,
        deleted_at: Option<i64>,
    ) -> Self {
        Self {
            id,
            created_at: DateTime::<Utc>::from_timestamp(created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(updated_at, 0).unwrap_or_default(),
            deleted_at: deleted_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamps() {
        let meta = RecordMeta::from_timestamps(7, 1_700_000_000, 1_700_000_060, None);
        assert_eq!(meta.id, 7);
        assert_eq!(meta.created_at.timestamp(), 1_700_000_000);
        assert_eq!(meta.updated_at.timestamp(), 1_700_000_060);
        assert!(meta.deleted_at.is_none());

        let deleted = RecordMeta::from_timestamps(7, 1, 2, Some(3));
        assert_eq!(deleted.deleted_at.map(|d| d.timestamp()), Some(3));
    }

    #[test]
    fn test_serialized_keys() {
        let meta = RecordMeta::from_timestamps(1, 0, 0, None);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["ID"], 1);
        assert!(json.get("CreatedAt").is_some());
        assert!(json.get("UpdatedAt").is_some());
        assert!(json["DeletedAt"].is_null());
    }
}
