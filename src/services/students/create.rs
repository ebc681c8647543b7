use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{StudentService, validate_student_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_student_fields(
        Some(&student_data.first_name),
        Some(&student_data.last_name),
        Some(student_data.age),
        Some(&student_data.grade),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    student_data.first_name = student_data.first_name.trim().to_string();
    student_data.last_name = student_data.last_name.trim().to_string();
    student_data.grade = student_data.grade.trim().to_string();

    let storage = service.get_storage();

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created", student.meta.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student created successfully",
            )))
        }
        Err(e) => {
            error!("Student creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    format!("Student creation failed: {e}"),
                )),
            )
        }
    }
}
