use super::{SeaOrmStorage, SoftDelete, soft_delete, update_active};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers, Model};
use crate::errors::{RegistryError, Result};
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 列出未删除的教师，按 ID 升序
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let result = Teachers::find_active()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            age: Set(req.age),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    async fn find_active_teacher(&self, id: i64) -> Result<Option<Model>> {
        Teachers::find_active()
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询教师失败: {e}")))
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        Ok(self.find_active_teacher(id).await?.map(|m| m.into_teacher()))
    }

    /// 更新教师，只覆盖请求中提供的字段
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let mut query = Teachers::update_many();

        if let Some(first_name) = update.first_name {
            query = query.col_expr(Column::FirstName, Expr::value(first_name));
        }

        if let Some(last_name) = update.last_name {
            query = query.col_expr(Column::LastName, Expr::value(last_name));
        }

        if let Some(age) = update.age {
            query = query.col_expr(Column::Age, Expr::value(age));
        }

        if let Some(department) = update.department {
            query = query.col_expr(Column::Department, Expr::value(department));
        }

        let updated = update_active::<Teachers, _>(
            &self.db,
            query,
            Condition::all().add(Column::Id.eq(id)),
        )
        .await
        .map_err(|e| RegistryError::database_operation(format!("更新教师失败: {e}")))?;

        if !updated {
            return Ok(None);
        }

        self.get_teacher_by_id_impl(id).await
    }

    /// 软删除教师
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        soft_delete::<Teachers, _>(&self.db, Condition::all().add(Column::Id.eq(id)))
            .await
            .map_err(|e| RegistryError::database_operation(format!("删除教师失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(first_name: &str) -> CreateTeacherRequest {
        CreateTeacherRequest {
            first_name: first_name.to_string(),
            last_name: "Somchai".to_string(),
            age: 41,
            department: "Math".to_string(),
        }
    }

    #[tokio::test]
    async fn test_teacher_crud_cycle() {
        let storage = SeaOrmStorage::in_memory().await;

        let created = storage.create_teacher_impl(teacher("Niran")).await.unwrap();
        let fetched = storage
            .get_teacher_by_id_impl(created.meta.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.department, "Math");

        let updated = storage
            .update_teacher_impl(
                created.meta.id,
                UpdateTeacherRequest {
                    department: Some("Physics".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.department, "Physics");
        assert_eq!(updated.age, 41);

        assert!(storage.delete_teacher_impl(created.meta.id).await.unwrap());
        assert!(
            storage
                .get_teacher_by_id_impl(created.meta.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_skips_deleted_teachers() {
        let storage = SeaOrmStorage::in_memory().await;
        let a = storage.create_teacher_impl(teacher("Niran")).await.unwrap();
        let b = storage.create_teacher_impl(teacher("Malee")).await.unwrap();
        storage.delete_teacher_impl(a.meta.id).await.unwrap();

        let list = storage.list_teachers_impl().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].meta.id, b.meta.id);
    }
}
