use actix_web::{HttpResponse, Result as ActixResult, web};

use super::not_found;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// HTTP处理程序
pub async fn list_students(service: web::Data<StudentService>) -> ActixResult<HttpResponse> {
    service.list_students().await
}

pub async fn create_student(
    service: web::Data<StudentService>,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    service.create_student(student_data.into_inner()).await
}

pub async fn get_student(
    service: web::Data<StudentService>,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.get_student(student_id.0).await
}

pub async fn update_student(
    service: web::Data<StudentService>,
    student_id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    service
        .update_student(student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    service.delete_student(student_id.0).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/students")
            .route(web::get().to(list_students))
            .route(web::post().to(create_student))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/students/{id}")
            .route(web::get().to(get_student))
            .route(web::put().to(update_student))
            .route(web::delete().to(delete_student))
            .default_service(web::to(not_found)),
    );
}
