//! 软删除约定
//!
//! `deleted_at` 为空的记录才是有效记录。所有读取经过 [`SoftDelete::find_active`]，
//! 所有删除经过 [`soft_delete`]，所有更新经过 [`update_active`]。
//! 表中的行不会被物理删除，ID 因此不会被复用。

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Select, UpdateMany,
    sea_query::Expr,
};

use crate::entity::prelude::{Students, Subjects, Teachers, Users};
use crate::entity::{students, subjects, teachers, users};

pub trait SoftDelete: EntityTrait {
    fn deleted_at_column() -> Self::Column;

    fn updated_at_column() -> Self::Column;

    /// 未删除记录的过滤条件
    fn not_deleted() -> Condition {
        Condition::all().add(Self::deleted_at_column().is_null())
    }

    /// 查询未删除的记录
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::not_deleted())
    }
}

/// 将满足条件的有效记录标记为已删除，返回是否有记录被标记
pub async fn soft_delete<E, C>(db: &C, condition: Condition) -> Result<bool, DbErr>
where
    E: SoftDelete,
    C: ConnectionTrait,
{
    let now = chrono::Utc::now().timestamp();

    let result = E::update_many()
        .col_expr(E::deleted_at_column(), Expr::value(now))
        .col_expr(E::updated_at_column(), Expr::value(now))
        .filter(E::not_deleted())
        .filter(condition)
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

/// 在单条 UPDATE 中更新满足条件的有效记录并刷新 `updated_at`
///
/// 条件与 `deleted_at IS NULL` 在同一语句中判断，已删除的行不会被写入。
pub async fn update_active<E, C>(
    db: &C,
    query: UpdateMany<E>,
    condition: Condition,
) -> Result<bool, DbErr>
where
    E: SoftDelete,
    C: ConnectionTrait,
{
    let now = chrono::Utc::now().timestamp();

    let result = query
        .col_expr(E::updated_at_column(), Expr::value(now))
        .filter(E::not_deleted())
        .filter(condition)
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

impl SoftDelete for Students {
    fn deleted_at_column() -> Self::Column {
        students::Column::DeletedAt
    }

    fn updated_at_column() -> Self::Column {
        students::Column::UpdatedAt
    }
}

impl SoftDelete for Subjects {
    fn deleted_at_column() -> Self::Column {
        subjects::Column::DeletedAt
    }

    fn updated_at_column() -> Self::Column {
        subjects::Column::UpdatedAt
    }
}

impl SoftDelete for Teachers {
    fn deleted_at_column() -> Self::Column {
        teachers::Column::DeletedAt
    }

    fn updated_at_column() -> Self::Column {
        teachers::Column::UpdatedAt
    }
}

impl SoftDelete for Users {
    fn deleted_at_column() -> Self::Column {
        users::Column::DeletedAt
    }

    fn updated_at_column() -> Self::Column {
        users::Column::UpdatedAt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use sea_orm::{ActiveModelTrait, PaginatorTrait, Set};

    async fn insert_student(storage: &SeaOrmStorage, first_name: &str) -> students::Model {
        let now = chrono::Utc::now().timestamp();
        students::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set("Lee".to_string()),
            age: Set(15),
            grade: Set("9".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_soft_delete_marks_instead_of_removing() {
        let storage = SeaOrmStorage::in_memory().await;
        let ann = insert_student(&storage, "Ann").await;
        insert_student(&storage, "Bob").await;

        let deleted = soft_delete::<Students, _>(
            &storage.db,
            Condition::all().add(students::Column::Id.eq(ann.id)),
        )
        .await
        .unwrap();
        assert!(deleted);

        // 行仍然存在，只是被标记
        let raw = Students::find_by_id(ann.id)
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert!(raw.deleted_at.is_some());
        assert_eq!(Students::find().count(&storage.db).await.unwrap(), 2);

        // 过滤条件排除已删除的行
        let active = Students::find_active().all(&storage.db).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].first_name, "Bob");
    }

    #[tokio::test]
    async fn test_update_active_skips_deleted_rows() {
        let storage = SeaOrmStorage::in_memory().await;
        let ann = insert_student(&storage, "Ann").await;
        let condition = || Condition::all().add(students::Column::Id.eq(ann.id));

        soft_delete::<Students, _>(&storage.db, condition())
            .await
            .unwrap();

        let query = Students::update_many()
            .col_expr(students::Column::Grade, Expr::value("10".to_string()));
        let updated = update_active::<Students, _>(&storage.db, query, condition())
            .await
            .unwrap();
        assert!(!updated);

        let raw = Students::find_by_id(ann.id)
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(raw.grade, "9");
    }

    #[tokio::test]
    async fn test_soft_delete_twice_reports_nothing_marked() {
        let storage = SeaOrmStorage::in_memory().await;
        let ann = insert_student(&storage, "Ann").await;
        let condition = || Condition::all().add(students::Column::Id.eq(ann.id));

        assert!(
            soft_delete::<Students, _>(&storage.db, condition())
                .await
                .unwrap()
        );
        assert!(
            !soft_delete::<Students, _>(&storage.db, condition())
                .await
                .unwrap()
        );
    }
}
