use actix_web::{HttpRequest, HttpResponse, error::InternalError, error::JsonPayloadError};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体错误处理器
///
/// 反序列化失败（缺少字段、类型错误）视为校验错误，其余为格式错误，均返回 400。
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid JSON body for {} {}: {}", req.method(), req.path(), err);

    let (code, message) = match &err {
        JsonPayloadError::Deserialize(e) => (ErrorCode::ValidationFailed, e.to_string()),
        JsonPayloadError::ContentType => (
            ErrorCode::BadRequest,
            "Content-Type must be application/json".to_string(),
        ),
        other => (ErrorCode::BadRequest, format!("Invalid JSON body: {other}")),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message));
    InternalError::from_response(err, response).into()
}
