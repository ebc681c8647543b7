pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::storage::Storage;
use crate::utils::validate::{validate_age, validate_text};

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 获取学生列表
    pub async fn list_students(&self) -> ActixResult<HttpResponse> {
        list::list_students(self).await
    }

    // 创建学生
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data).await
    }

    // 根据ID获取学生
    pub async fn get_student(&self, student_id: i64) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data).await
    }

    // 删除学生
    pub async fn delete_student(&self, student_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id).await
    }
}

/// 校验学生字段，None 表示该字段未提供
pub(crate) fn validate_student_fields(
    first_name: Option<&str>,
    last_name: Option<&str>,
    age: Option<i32>,
    grade: Option<&str>,
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
    if let Some(grade) = grade {
        validate_text("Grade", grade)?;
    }
    Ok(())
}
