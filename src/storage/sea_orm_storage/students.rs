use super::{SeaOrmStorage, SoftDelete, soft_delete, update_active};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{RegistryError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 列出未删除的学生，按 ID 升序
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let result = Students::find_active()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            age: Set(req.age),
            grade: Set(req.grade),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    async fn find_active_student(&self, id: i64) -> Result<Option<Model>> {
        Students::find_active()
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询学生失败: {e}")))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        Ok(self.find_active_student(id).await?.map(|m| m.into_student()))
    }

    /// 更新学生，只覆盖请求中提供的字段
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let mut query = Students::update_many();

        if let Some(first_name) = update.first_name {
            query = query.col_expr(Column::FirstName, Expr::value(first_name));
        }

        if let Some(last_name) = update.last_name {
            query = query.col_expr(Column::LastName, Expr::value(last_name));
        }

        if let Some(age) = update.age {
            query = query.col_expr(Column::Age, Expr::value(age));
        }

        if let Some(grade) = update.grade {
            query = query.col_expr(Column::Grade, Expr::value(grade));
        }

        let updated = update_active::<Students, _>(
            &self.db,
            query,
            Condition::all().add(Column::Id.eq(id)),
        )
        .await
        .map_err(|e| RegistryError::database_operation(format!("更新学生失败: {e}")))?;

        if !updated {
            return Ok(None);
        }

        self.get_student_by_id_impl(id).await
    }

    /// 软删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        soft_delete::<Students, _>(&self.db, Condition::all().add(Column::Id.eq(id)))
            .await
            .map_err(|e| RegistryError::database_operation(format!("删除学生失败: {e}")))
    }
}
