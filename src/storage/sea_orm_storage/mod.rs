//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod soft_delete;
mod students;
mod subjects;
mod teachers;
mod users;

pub use soft_delete::{SoftDelete, soft_delete, update_active};

use crate::config::DatabaseConfig;
use crate::errors::{RegistryError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 根据配置建立数据库连接
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(config)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        info!(
            "Database connection established ({})",
            db_url.split(':').next().unwrap_or("unknown")
        );

        Ok(Self { db })
    }

    /// 运行迁移，确保所有表存在
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| RegistryError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("Database schema is up to date");
        Ok(())
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RegistryError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RegistryError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RegistryError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 由配置构建连接 URL
    ///
    /// `url` 非空时优先使用并从 scheme 推断类型，否则按 engine 拼接。
    pub fn build_database_url(config: &DatabaseConfig) -> Result<String> {
        if !config.url.trim().is_empty() {
            return Self::infer_database_url(config.url.trim());
        }

        let required = |value: &str, var: &str| -> Result<()> {
            if value.trim().is_empty() {
                Err(RegistryError::database_config(format!("{var} is not set")))
            } else {
                Ok(())
            }
        };

        let engine = config.engine.trim().to_ascii_lowercase();
        let (scheme, default_port) = match engine.as_str() {
            "sqlite" | "sqlite3" => {
                required(&config.name, "DB_NAME")?;
                return Self::infer_database_url(config.name.trim())
                    .or_else(|_| Ok(format!("sqlite://{}?mode=rwc", config.name.trim())));
            }
            "postgres" | "postgresql" => ("postgres", 5432),
            "mysql" | "mariadb" => ("mysql", 3306),
            "" => {
                return Err(RegistryError::database_config("DB_TYPE is not set"));
            }
            other => {
                return Err(RegistryError::database_config(format!(
                    "不支持的数据库类型: {other}. 支持: postgres, mysql, sqlite"
                )));
            }
        };

        required(&config.user, "DB_USER")?;
        required(&config.host, "DB_HOST")?;
        required(&config.name, "DB_NAME")?;

        let credentials = if config.password.is_empty() {
            config.user.clone()
        } else {
            format!("{}:{}", config.user, config.password)
        };

        Ok(format!(
            "{scheme}://{credentials}@{}:{}/{}",
            config.host.trim(),
            config.port.unwrap_or(default_port),
            config.name.trim()
        ))
    }

    /// 从 URL 自动推断数据库类型
    fn infer_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RegistryError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 测试用内存数据库（单连接，保证所有查询落在同一个库上）
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Self {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:").expect("valid sqlite url");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .expect("in-memory sqlite");

        let storage = Self {
            db: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        };
        storage.migrate().await.expect("migrations");
        storage
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 科目模块
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 教师模块
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 用户模块
    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_user(&self, email: &str, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(email, update).await
    }

    async fn delete_user(&self, email: &str) -> Result<bool> {
        self.delete_user_impl(email).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }
}
