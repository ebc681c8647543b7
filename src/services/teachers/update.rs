use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::{TeacherService, validate_teacher_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::UpdateTeacherRequest, responses::TeacherResponse},
};

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    mut update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_teacher_fields(
        update_data.first_name.as_deref(),
        update_data.last_name.as_deref(),
        update_data.age,
        update_data.department.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    for field in [
        &mut update_data.first_name,
        &mut update_data.last_name,
        &mut update_data.department,
    ] {
        if let Some(value) = field {
            *value = value.trim().to_string();
        }
    }

    let storage = service.get_storage();

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherResponse { teacher },
            "Teacher information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Failed to update teacher {teacher_id}: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherUpdateFailed,
                    format!("Failed to update teacher information: {e}"),
                )),
            )
        }
    }
}
