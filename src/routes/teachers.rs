use actix_web::{HttpResponse, Result as ActixResult, web};

use super::not_found;
use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::services::TeacherService;
use crate::utils::SafeIDI64;

// HTTP处理程序
pub async fn list_teachers(service: web::Data<TeacherService>) -> ActixResult<HttpResponse> {
    service.list_teachers().await
}

pub async fn create_teacher(
    service: web::Data<TeacherService>,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    service.create_teacher(teacher_data.into_inner()).await
}

pub async fn get_teacher(
    service: web::Data<TeacherService>,
    teacher_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.get_teacher(teacher_id.0).await
}

pub async fn update_teacher(
    service: web::Data<TeacherService>,
    teacher_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    service
        .update_teacher(teacher_id.0, update_data.into_inner())
        .await
}

pub async fn delete_teacher(
    service: web::Data<TeacherService>,
    teacher_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.delete_teacher(teacher_id.0).await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/teachers")
            .route(web::get().to(list_teachers))
            .route(web::post().to(create_teacher))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/teachers/{id}")
            .route(web::get().to(get_teacher))
            .route(web::put().to(update_teacher))
            .route(web::delete().to(delete_teacher))
            .default_service(web::to(not_found)),
    );
}
