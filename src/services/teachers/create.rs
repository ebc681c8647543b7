use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{TeacherService, validate_teacher_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::CreateTeacherRequest, responses::TeacherResponse},
};

pub async fn create_teacher(
    service: &TeacherService,
    mut teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_teacher_fields(
        Some(&teacher_data.first_name),
        Some(&teacher_data.last_name),
        Some(teacher_data.age),
        Some(&teacher_data.department),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    teacher_data.first_name = teacher_data.first_name.trim().to_string();
    teacher_data.last_name = teacher_data.last_name.trim().to_string();
    teacher_data.department = teacher_data.department.trim().to_string();

    let storage = service.get_storage();

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!("Teacher {} created", teacher.meta.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherResponse { teacher },
                "Teacher created successfully",
            )))
        }
        Err(e) => {
            error!("Teacher creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherCreationFailed,
                    format!("Teacher creation failed: {e}"),
                )),
            )
        }
    }
}
