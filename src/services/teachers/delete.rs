use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => {
            info!("Teacher {teacher_id} deleted");
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Teacher deletion failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherDeleteFailed,
                    format!("Teacher deletion failed: {e}"),
                )),
            )
        }
    }
}
