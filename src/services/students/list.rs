use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::responses::StudentListResponse};

pub async fn list_students(service: &StudentService) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.list_students().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentListResponse { items },
            "Student list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to retrieve student list: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student list: {e}"),
                )),
            )
        }
    }
}
