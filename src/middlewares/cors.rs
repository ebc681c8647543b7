//! 跨域中间件
//!
//! 只允许配置中的单一来源，预检结果缓存 `cors.max_age` 秒。

use actix_cors::Cors;
use tracing::warn;

use crate::config::CorsConfig;

pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .max_age(config.max_age);

    if config.allowed_origin == "*" {
        // 通配来源不能与凭据同时使用
        warn!("CORS allows any origin, credentials are disabled");
        return cors.allow_any_origin();
    }

    cors = cors.allowed_origin(&config.allowed_origin);
    if config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::http::{Method, StatusCode, header};
    use actix_web::{App, HttpResponse, test, web};

    #[actix_web::test]
    async fn test_preflight_for_configured_origin() {
        let config = AppConfig::get();
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&config.cors))
                .route(
                    "/students",
                    web::post().to(|| async { HttpResponse::Created().finish() }),
                ),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/students")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "43200");
    }

    #[actix_web::test]
    async fn test_other_origin_is_rejected() {
        let config = AppConfig::get();
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&config.cors))
                .route(
                    "/students",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/students")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
