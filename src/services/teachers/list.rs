use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::responses::TeacherListResponse};

pub async fn list_teachers(service: &TeacherService) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.list_teachers().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherListResponse { items },
            "Teacher list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to retrieve teacher list: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve teacher list: {e}"),
                )),
            )
        }
    }
}
