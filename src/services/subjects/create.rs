use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SubjectService, normalize_description, validate_subject_fields};
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::{requests::CreateSubjectRequest, responses::SubjectResponse},
};

pub async fn create_subject(
    service: &SubjectService,
    mut subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_subject_fields(
        Some(&subject_data.name),
        subject_data.description.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    subject_data.name = subject_data.name.trim().to_string();
    subject_data.description = normalize_description(subject_data.description);

    let storage = service.get_storage();

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} created", subject.meta.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubjectResponse { subject },
                "Subject created successfully",
            )))
        }
        Err(e) => {
            error!("Subject creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubjectCreationFailed,
                    format!("Subject creation failed: {e}"),
                )),
            )
        }
    }
}
