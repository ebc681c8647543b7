//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub grade: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::{RecordMeta, students::entities::Student};

        Student {
            meta: RecordMeta::from_timestamps(
                self.id,
                self.created_at,
                self.updated_at,
                self.deleted_at,
            ),
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            grade: self.grade,
        }
    }
}
