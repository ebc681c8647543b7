use super::{SeaOrmStorage, SoftDelete, soft_delete, update_active};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects, Model};
use crate::errors::{RegistryError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 列出未删除的科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let result = Subjects::find_active()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    async fn find_active_subject(&self, id: i64) -> Result<Option<Model>> {
        Subjects::find_active()
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询科目失败: {e}")))
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        Ok(self.find_active_subject(id).await?.map(|m| m.into_subject()))
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let mut query = Subjects::update_many();

        if let Some(name) = update.name {
            query = query.col_expr(Column::Name, Expr::value(name));
        }

        // 空字符串表示清空描述
        if let Some(description) = update.description {
            let description = Some(description).filter(|d| !d.is_empty());
            query = query.col_expr(Column::Description, Expr::value(description));
        }

        let updated = update_active::<Subjects, _>(
            &self.db,
            query,
            Condition::all().add(Column::Id.eq(id)),
        )
        .await
        .map_err(|e| RegistryError::database_operation(format!("更新科目失败: {e}")))?;

        if !updated {
            return Ok(None);
        }

        self.get_subject_by_id_impl(id).await
    }

    /// 软删除科目
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        soft_delete::<Subjects, _>(&self.db, Condition::all().add(Column::Id.eq(id)))
            .await
            .map_err(|e| RegistryError::database_operation(format!("删除科目失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subject_without_description() {
        let storage = SeaOrmStorage::in_memory().await;

        let created = storage
            .create_subject_impl(CreateSubjectRequest {
                name: "Chemistry".to_string(),
                description: None,
            })
            .await
            .unwrap();
        assert!(created.description.is_none());

        let updated = storage
            .update_subject_impl(
                created.meta.id,
                UpdateSubjectRequest {
                    description: Some("Organic and inorganic".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Chemistry");
        assert_eq!(updated.description.as_deref(), Some("Organic and inorganic"));
    }

    #[tokio::test]
    async fn test_deleted_subject_is_gone() {
        let storage = SeaOrmStorage::in_memory().await;
        let created = storage
            .create_subject_impl(CreateSubjectRequest {
                name: "History".to_string(),
                description: Some("World history".to_string()),
            })
            .await
            .unwrap();

        assert!(storage.delete_subject_impl(created.meta.id).await.unwrap());
        assert!(storage.list_subjects_impl().await.unwrap().is_empty());
        assert!(
            storage
                .get_subject_by_id_impl(created.meta.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(!storage.delete_subject_impl(created.meta.id).await.unwrap());
    }
}
