use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::responses::SubjectListResponse};

pub async fn list_subjects(service: &SubjectService) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.list_subjects().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectListResponse { items },
            "Subject list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to retrieve subject list: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve subject list: {e}"),
                )),
            )
        }
    }
}
