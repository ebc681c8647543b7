use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password_or_dummy_blocking;
use crate::utils::validate::normalize_email;

fn auth_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Email or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();
    let email = normalize_email(&login_request.email);

    // 1. 根据邮箱获取用户
    let user = match storage.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(e) => {
            error!("Login lookup failed: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 验证密码，用户不存在时同样执行一次哈希比对
    let verified = match verify_password_or_dummy_blocking(
        login_request.password,
        user.as_ref().map(|u| u.password_hash.clone()),
    )
    .await
    {
        Ok(verified) => verified,
        Err(e) => {
            error!("Password verification failed: {e}");
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed",
                )),
            );
        }
    };
    let Some(mut user) = user.filter(|_| verified) else {
        warn!("Failed login attempt for {email}");
        return Ok(auth_failed());
    };

    // 3. 更新最后登录时间
    let now = chrono::Utc::now();
    match storage.update_last_login(user.meta.id).await {
        Ok(_) => user.last_login = Some(now),
        Err(e) => warn!("Failed to update last login for {email}: {e}"),
    }

    // 4. 生成访问令牌
    match user.generate_access_token() {
        Ok(access_token) => {
            info!("User {email} logged in successfully");
            let response = LoginResponse {
                access_token,
                expires_in: JwtUtils::access_token_ttl_secs(),
                user,
                created_at: now,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            error!("Failed to generate JWT token: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
