use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::errors::RegistryError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::{
    normalize_email, validate_email, validate_password_simple, validate_text,
};

pub async fn update_user(
    service: &UserService,
    email: &str,
    mut update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    // 验证新邮箱
    if let Some(new_email) = update_data.email.as_deref() {
        let new_email = normalize_email(new_email);
        if let Err(msg) = validate_email(&new_email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }
        update_data.email = Some(new_email);
    }

    if let Some(name) = update_data.name.as_deref() {
        if let Err(msg) = validate_text("Name", name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }
        update_data.name = Some(name.trim().to_string());
    }

    // 新密码需重新哈希
    if let Some(password) = update_data.password.take() {
        if let Err(msg) = validate_password_simple(&password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }
        match hash_password_blocking(password).await {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                error!("Password hashing failed: {e}");
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Password hashing failed",
                    )),
                );
            }
        }
    }

    let storage = service.get_storage();

    match storage.update_user(email, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::UserNotFound, "User not found"))),
        Err(RegistryError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::UserAlreadyExists, msg))),
        Err(e) => {
            error!("Failed to update user {email}: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    format!("Failed to update user information: {e}"),
                )),
            )
        }
    }
}
