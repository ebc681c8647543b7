use actix_web::{HttpResponse, Result as ActixResult, web};

use super::not_found;
use crate::models::auth::LoginRequest;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::{AuthService, UserService};
use crate::utils::SafeEmail;

// HTTP处理程序
pub async fn list_users(service: web::Data<UserService>) -> ActixResult<HttpResponse> {
    service.list_users().await
}

pub async fn create_user(
    service: web::Data<UserService>,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    service.create_user(user_data.into_inner()).await
}

pub async fn get_user(
    service: web::Data<UserService>,
    email: SafeEmail,
) -> ActixResult<HttpResponse> {
    service.get_user(&email.0).await
}

pub async fn update_user(
    service: web::Data<UserService>,
    email: SafeEmail,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    service.update_user(&email.0, update_data.into_inner()).await
}

pub async fn delete_user(
    service: web::Data<UserService>,
    email: SafeEmail,
) -> ActixResult<HttpResponse> {
    service.delete_user(&email.0).await
}

pub async fn login(
    service: web::Data<AuthService>,
    login_request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    service.login(login_request.into_inner()).await
}

// 配置路由，登录必须先于 /users/{email} 注册
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/login")
            .route(web::post().to(login))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/users/{email}")
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user))
            .default_service(web::to(not_found)),
    );
}
