use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student {student_id} deleted");
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Student deletion failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentDeleteFailed,
                    format!("Student deletion failed: {e}"),
                )),
            )
        }
    }
}
