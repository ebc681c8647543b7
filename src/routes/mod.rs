pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{AuthService, StudentService, SubjectService, TeacherService, UserService};
use crate::storage::Storage;
use crate::utils::json_error_handler;

pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;

/// 未匹配路由（或不支持的方法）统一返回 404
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "message": "Not found" }))
}

/// 注册服务实例与全部资源路由
pub fn configure_routes(cfg: &mut web::ServiceConfig, storage: Arc<dyn Storage>) {
    let config = AppConfig::get();

    cfg.app_data(
        web::JsonConfig::default()
            .limit(config.server.limits.max_payload_size)
            .error_handler(json_error_handler),
    )
    .app_data(web::Data::new(StudentService::new(storage.clone())))
    .app_data(web::Data::new(SubjectService::new(storage.clone())))
    .app_data(web::Data::new(TeacherService::new(storage.clone())))
    .app_data(web::Data::new(UserService::new(storage.clone())))
    .app_data(web::Data::new(AuthService::new(storage)))
    .configure(configure_student_routes)
    .configure(configure_subject_routes)
    .configure(configure_teacher_routes)
    .configure(configure_user_routes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    async fn test_storage() -> Arc<dyn Storage> {
        Arc::new(SeaOrmStorage::in_memory().await)
    }

    macro_rules! init_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .configure(|cfg| configure_routes(cfg, $storage.clone()))
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_student_lifecycle() {
        let storage = test_storage().await;
        let app = init_app!(storage);

        let req = test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"FirstName": "Ann", "LastName": "Lee", "Age": 15, "Grade": "9"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["student"]["ID"].as_i64().unwrap();
        assert!(id > 0);

        let req = test::TestRequest::get()
            .uri(&format!("/students/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let student = &body["data"]["student"];
        assert_eq!(student["FirstName"], "Ann");
        assert_eq!(student["LastName"], "Lee");
        assert_eq!(student["Age"], 15);
        assert_eq!(student["Grade"], "9");
        assert!(student["DeletedAt"].is_null());

        let req = test::TestRequest::put()
            .uri(&format!("/students/{id}"))
            .set_json(json!({"Grade": "10"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["student"]["Grade"], "10");
        assert_eq!(body["data"]["student"]["FirstName"], "Ann");

        let req = test::TestRequest::delete()
            .uri(&format!("/students/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/students/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&format!("/students/{id}"))
            .set_json(json!({"Grade": "11"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&format!("/students/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/students").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_unmatched_routes_return_not_found() {
        let storage = test_storage().await;
        let app = init_app!(storage);

        for req in [
            test::TestRequest::get().uri("/nope").to_request(),
            test::TestRequest::post().uri("/courses/1").to_request(),
            // 已存在的路径但方法不支持
            test::TestRequest::patch().uri("/students").to_request(),
            test::TestRequest::get().uri("/users/login").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"message": "Not found"}));
        }
    }

    #[actix_web::test]
    async fn test_invalid_input_is_bad_request() {
        let storage = test_storage().await;
        let app = init_app!(storage);

        let req = test::TestRequest::get().uri("/teachers/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // 缺少必填字段
        let req = test::TestRequest::post()
            .uri("/subjects")
            .set_json(json!({"Description": "no name"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1001);

        let req = test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"FirstName": " ", "LastName": "Lee", "Age": 15, "Grade": "9"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/teachers")
            .set_json(json!({"FirstName": "Tom", "LastName": "Kim", "Age": -1, "Department": "Math"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_missing_record_is_not_found() {
        let storage = test_storage().await;
        let app = init_app!(storage);

        let req = test::TestRequest::put()
            .uri("/subjects/42")
            .set_json(json!({"Name": "Physics"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/users/ghost@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_user_registration_and_login() {
        let storage = test_storage().await;
        let app = init_app!(storage);

        let payload = json!({
            "Email": "Ann@Example.com",
            "Password": "SecurePass123",
            "Name": "Ann",
            "Role": "teacher"
        });

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["Email"], "ann@example.com");
        assert!(body["data"]["user"].get("PasswordHash").is_none());

        // 重复邮箱
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({"Email": "ann@example.com", "Password": "SecurePass123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());
        assert!(body["data"]["user"]["LastLogin"].is_string());

        for (email, password) in [
            ("ann@example.com", "WrongPass123"),
            ("nobody@example.com", "SecurePass123"),
        ] {
            let req = test::TestRequest::post()
                .uri("/users/login")
                .set_json(json!({"Email": email, "Password": password}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Email or password is incorrect");
        }
    }

    #[actix_web::test]
    async fn test_user_update_and_delete_by_email() {
        let storage = test_storage().await;
        let app = init_app!(storage);

        for email in ["ann@example.com", "bob@example.com"] {
            let req = test::TestRequest::post()
                .uri("/users")
                .set_json(json!({"Email": email, "Password": "SecurePass123"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"Email": "weak@example.com", "Password": "short"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/users/bob@example.com")
            .set_json(json!({"Email": "ann@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::put()
            .uri("/users/bob@example.com")
            .set_json(json!({"Name": "Bob", "Role": "admin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["Role"], "admin");

        let req = test::TestRequest::delete()
            .uri("/users/bob@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/users/bob@example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // 已删除的用户不能再登录
        let req = test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({"Email": "bob@example.com", "Password": "SecurePass123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::put()
            .uri("/users/bob@example.com")
            .set_json(json!({"Name": "Ghost"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // 邮箱释放后可以重新注册
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"Email": "bob@example.com", "Password": "SecurePass123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
