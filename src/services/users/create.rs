use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::errors::RegistryError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::{
    normalize_email, validate_email, validate_password_simple, validate_text,
};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    user_data.email = normalize_email(&user_data.email);

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 验证密码策略
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    if let Some(name) = user_data.name.as_deref() {
        if let Err(msg) = validate_text("Name", name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }
        user_data.name = Some(name.trim().to_string());
    }

    user_data.password = match hash_password_blocking(user_data.password).await {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Password hashing failed",
                )),
            );
        }
    };

    let storage = service.get_storage();

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created", user.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "User created successfully",
            )))
        }
        Err(RegistryError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::UserAlreadyExists, msg))),
        Err(e) => {
            error!("User creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    format!("User creation failed: {e}"),
                )),
            )
        }
    }
}
