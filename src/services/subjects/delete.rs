use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_subject(
    service: &SubjectService,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            info!("Subject {subject_id} deleted");
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!("Subject deletion failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubjectDeleteFailed,
                    format!("Subject deletion failed: {e}"),
                )),
            )
        }
    }
}
