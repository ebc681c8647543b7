use actix_web::{HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::responses::UserListResponse};

pub async fn list_users(service: &UserService) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.list_users().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserListResponse { items },
            "User list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to retrieve user list: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve user list: {e}"),
                )),
            )
        }
    }
}
