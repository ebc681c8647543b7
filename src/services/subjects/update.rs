use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SubjectService, validate_subject_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::{requests::UpdateSubjectRequest, responses::SubjectResponse},
};

pub async fn update_subject(
    service: &SubjectService,
    subject_id: i64,
    mut update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_subject_fields(
        update_data.name.as_deref(),
        update_data.description.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Some(name) = update_data.name.as_mut() {
        *name = name.trim().to_string();
    }
    // 空字符串表示清空描述
    if let Some(description) = update_data.description.as_mut() {
        *description = description.trim().to_string();
    }

    let storage = service.get_storage();

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "Subject information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!("Failed to update subject {subject_id}: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubjectUpdateFailed,
                    format!("Failed to update subject information: {e}"),
                )),
            )
        }
    }
}
