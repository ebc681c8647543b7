use actix_web::{HttpResponse, Result as ActixResult, web};

use super::not_found;
use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::services::SubjectService;
use crate::utils::SafeIDI64;

// HTTP处理程序
pub async fn list_subjects(service: web::Data<SubjectService>) -> ActixResult<HttpResponse> {
    service.list_subjects().await
}

pub async fn create_subject(
    service: web::Data<SubjectService>,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    service.create_subject(subject_data.into_inner()).await
}

pub async fn get_subject(
    service: web::Data<SubjectService>,
    subject_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.get_subject(subject_id.0).await
}

pub async fn update_subject(
    service: web::Data<SubjectService>,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    service
        .update_subject(subject_id.0, update_data.into_inner())
        .await
}

pub async fn delete_subject(
    service: web::Data<SubjectService>,
    subject_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.delete_subject(subject_id.0).await
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/subjects")
            .route(web::get().to(list_subjects))
            .route(web::post().to(create_subject))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/subjects/{id}")
            .route(web::get().to(get_subject))
            .route(web::put().to(update_subject))
            .route(web::delete().to(delete_subject))
            .default_service(web::to(not_found)),
    );
}
