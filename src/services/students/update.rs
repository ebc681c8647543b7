use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::{StudentService, validate_student_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::UpdateStudentRequest, responses::StudentResponse},
};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_student_fields(
        update_data.first_name.as_deref(),
        update_data.last_name.as_deref(),
        update_data.age,
        update_data.grade.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    for field in [
        &mut update_data.first_name,
        &mut update_data.last_name,
        &mut update_data.grade,
    ] {
        if let Some(value) = field {
            *value = value.trim().to_string();
        }
    }

    let storage = service.get_storage();

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to update student {student_id}: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentUpdateFailed,
                    format!("Failed to update student information: {e}"),
                )),
            )
        }
    }
}
