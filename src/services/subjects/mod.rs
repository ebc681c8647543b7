pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::storage::Storage;
use crate::utils::validate::validate_text;

/// 描述字段的最大长度
const MAX_DESCRIPTION_LEN: usize = 1000;

pub struct SubjectService {
    storage: Arc<dyn Storage>,
}

impl SubjectService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    pub async fn list_subjects(&self) -> ActixResult<HttpResponse> {
        list::list_subjects(self).await
    }

    pub async fn create_subject(
        &self,
        subject_data: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, subject_data).await
    }

    pub async fn get_subject(&self, subject_id: i64) -> ActixResult<HttpResponse> {
        get::get_subject(self, subject_id).await
    }

    pub async fn update_subject(
        &self,
        subject_id: i64,
        update_data: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, subject_id, update_data).await
    }

    pub async fn delete_subject(&self, subject_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, subject_id).await
    }
}

pub(crate) fn validate_subject_fields(
    name: Option<&str>,
    description: Option<&str>,
) -> Result<(), String> {
    if let Some(name) = name {
        validate_text("Name", name)?;
    }
    if let Some(description) = description
        && description.chars().count() > MAX_DESCRIPTION_LEN
    {
        return Err(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        ));
    }
    Ok(())
}

/// 空白描述视为未填写
pub(crate) fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
