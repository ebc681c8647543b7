use super::{SeaOrmStorage, SoftDelete, soft_delete, update_active};
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model};
use crate::errors::{RegistryError, Result};
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UpdateUserRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr, sea_query::Expr,
};

/// 有效用户邮箱唯一索引冲突视为 Conflict，其余为数据库操作错误
fn map_write_error(err: DbErr, email: &str, action: &str) -> RegistryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            RegistryError::conflict(format!("Email {email} is already registered"))
        }
        _ => RegistryError::database_operation(format!("{action}: {err}")),
    }
}

impl SeaOrmStorage {
    /// 列出未删除的用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let result = Users::find_active()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    async fn find_active_user(&self, email: &str) -> Result<Option<Model>> {
        Users::find_active()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询用户失败: {e}")))
    }

    /// 创建用户，`req.password` 已是哈希值
    ///
    /// 预检查给出友好提示，并发创建由唯一索引兜底。
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        if self.find_active_user(&req.email).await?.is_some() {
            return Err(RegistryError::conflict(format!(
                "Email {} is already registered",
                req.email
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let email = req.email.clone();

        let model = ActiveModel {
            email: Set(req.email),
            password_hash: Set(req.password),
            name: Set(req.name),
            role: Set(req.role.to_string()),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, &email, "创建用户失败"))?;

        Ok(result.into_user())
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        Ok(self.find_active_user(email).await?.map(|m| m.into_user()))
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        email: &str,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = self.find_active_user(email).await? else {
            return Ok(None);
        };

        // 预检查给出友好提示，并发写入由唯一索引兜底
        if let Some(ref new_email) = update.email
            && new_email != email
            && self.find_active_user(new_email).await?.is_some()
        {
            return Err(RegistryError::conflict(format!(
                "Email {new_email} is already registered"
            )));
        }

        let target_email = update.email.clone().unwrap_or_else(|| email.to_string());
        let mut query = Users::update_many();

        if let Some(email) = update.email {
            query = query.col_expr(Column::Email, Expr::value(email));
        }

        if let Some(password) = update.password {
            query = query.col_expr(Column::PasswordHash, Expr::value(password));
        }

        if let Some(name) = update.name {
            query = query.col_expr(Column::Name, Expr::value(Some(name)));
        }

        if let Some(role) = update.role {
            query = query.col_expr(Column::Role, Expr::value(role.to_string()));
        }

        let updated = update_active::<Users, _>(
            &self.db,
            query,
            Condition::all().add(Column::Id.eq(existing.id)),
        )
        .await
        .map_err(|e| map_write_error(e, &target_email, "更新用户失败"))?;

        if !updated {
            return Ok(None);
        }

        let result = Users::find_active()
            .filter(Column::Id.eq(existing.id))
            .one(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 软删除用户
    pub async fn delete_user_impl(&self, email: &str) -> Result<bool> {
        soft_delete::<Users, _>(&self.db, Condition::all().add(Column::Email.eq(email)))
            .await
            .map_err(|e| RegistryError::database_operation(format!("删除用户失败: {e}")))
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Users::not_deleted())
            .exec(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn user(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            password: "$argon2id$v=19$placeholder".to_string(),
            name: Some("Ann Lee".to_string()),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_email() {
        let storage = SeaOrmStorage::in_memory().await;
        let created = storage.create_user_impl(user("ann@example.com")).await.unwrap();

        let fetched = storage
            .get_user_by_email_impl("ann@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.meta.id, created.meta.id);
        assert_eq!(fetched.name.as_deref(), Some("Ann Lee"));
        assert_eq!(fetched.role, UserRole::User);
        assert_eq!(fetched.password_hash, "$argon2id$v=19$placeholder");
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let storage = SeaOrmStorage::in_memory().await;
        storage.create_user_impl(user("ann@example.com")).await.unwrap();

        let err = storage
            .create_user_impl(user("ann@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Conflict(_)));
        assert_eq!(storage.list_users_impl().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_one_live_email() {
        let storage = SeaOrmStorage::in_memory().await;

        let (a, b) = tokio::join!(
            storage.create_user_impl(user("ann@example.com")),
            storage.create_user_impl(user("ann@example.com")),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let err = a.err().or(b.err()).unwrap();
        assert!(matches!(err, RegistryError::Conflict(_)));

        let live = Users::find_active()
            .filter(Column::Email.eq("ann@example.com"))
            .all(&storage.db)
            .await
            .unwrap();
        assert_eq!(live.len(), 1);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate_live_email() {
        let storage = SeaOrmStorage::in_memory().await;
        storage.create_user_impl(user("ann@example.com")).await.unwrap();

        // 绕过预检查直接插入
        let now = chrono::Utc::now().timestamp();
        let err = ActiveModel {
            email: Set("ann@example.com".to_string()),
            password_hash: Set("$argon2id$v=19$placeholder".to_string()),
            name: Set(None),
            role: Set("user".to_string()),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap_err();

        let mapped = map_write_error(err, "ann@example.com", "创建用户失败");
        assert!(matches!(mapped, RegistryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_email_can_be_reused_after_delete() {
        let storage = SeaOrmStorage::in_memory().await;
        let first = storage.create_user_impl(user("ann@example.com")).await.unwrap();
        assert!(storage.delete_user_impl("ann@example.com").await.unwrap());
        assert!(
            storage
                .get_user_by_email_impl("ann@example.com")
                .await
                .unwrap()
                .is_none()
        );

        let second = storage.create_user_impl(user("ann@example.com")).await.unwrap();
        assert!(second.meta.id > first.meta.id);
    }

    #[tokio::test]
    async fn test_update_email_conflict_and_missing() {
        let storage = SeaOrmStorage::in_memory().await;
        storage.create_user_impl(user("ann@example.com")).await.unwrap();
        storage.create_user_impl(user("bob@example.com")).await.unwrap();

        let err = storage
            .update_user_impl(
                "bob@example.com",
                UpdateUserRequest {
                    email: Some("ann@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Conflict(_)));

        let missing = storage
            .update_user_impl(
                "nobody@example.com",
                UpdateUserRequest {
                    name: Some("Nobody".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
        assert!(
            storage
                .get_user_by_email_impl("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_role_and_last_login() {
        let storage = SeaOrmStorage::in_memory().await;
        let created = storage.create_user_impl(user("ann@example.com")).await.unwrap();
        assert!(created.last_login.is_none());

        let updated = storage
            .update_user_impl(
                "ann@example.com",
                UpdateUserRequest {
                    role: Some(UserRole::Teacher),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.role, UserRole::Teacher);

        assert!(storage.update_last_login_impl(created.meta.id).await.unwrap());
        let fetched = storage
            .get_user_by_email_impl("ann@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(fetched.last_login.is_some());
    }
}
