use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_user(service: &UserService, email: &str) -> ActixResult<HttpResponse> {
    let storage = service.get_storage();

    match storage.delete_user(email).await {
        Ok(true) => {
            info!("User {email} deleted");
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::UserNotFound, "User not found"))),
        Err(e) => {
            error!("User deletion failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserDeleteFailed,
                    format!("User deletion failed: {e}"),
                )),
            )
        }
    }
}
