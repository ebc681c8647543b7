pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::storage::Storage;
use crate::utils::validate::{validate_age, validate_text};

pub struct TeacherService {
    storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 获取教师列表
    pub async fn list_teachers(&self) -> ActixResult<HttpResponse> {
        list::list_teachers(self).await
    }

    // 创建教师
    pub async fn create_teacher(
        &self,
        teacher_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, teacher_data).await
    }

    // 根据ID获取教师
    pub async fn get_teacher(&self, teacher_id: i64) -> ActixResult<HttpResponse> {
        get::get_teacher(self, teacher_id).await
    }

    // 更新教师信息
    pub async fn update_teacher(
        &self,
        teacher_id: i64,
        update_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, teacher_id, update_data).await
    }

    // 删除教师
    pub async fn delete_teacher(&self, teacher_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, teacher_id).await
    }
}

/// 校验教师字段，None 表示该字段未提供
pub(crate) fn validate_teacher_fields(
    first_name: Option<&str>,
    last_name: Option<&str>,
    age: Option<i32>,
    department: Option<&str>,
) -> Result<(), String> {
    if let Some(first_name) = first_name {
        validate_text("FirstName", first_name)?;
    }
    if let Some(last_name) = last_name {
        validate_text("LastName", last_name)?;
    }
    if let Some(age) = age {
        validate_age(age)?;
    }
    if let Some(department) = department {
        validate_text("Department", department)?;
    }
    Ok(())
}
