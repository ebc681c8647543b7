use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 记录存储
///
/// 所有读取只返回未软删除的记录；删除只做软删除。
/// `Ok(None)` / `Ok(false)` 表示记录不存在或已删除。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 列出学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 更新学生
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 用户管理方法（以邮箱为键）
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 创建用户，邮箱已被未删除用户占用时返回 Conflict
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户信息，新邮箱被占用时返回 Conflict
    async fn update_user(&self, email: &str, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, email: &str) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
}

/// 连接数据库并确保表结构存在
pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    storage.migrate().await?;
    Ok(Arc::new(storage))
}
