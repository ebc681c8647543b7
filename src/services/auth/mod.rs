pub mod login;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::LoginRequest;
use crate::storage::Storage;

pub struct AuthService {
    storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 用户登录
    pub async fn login(&self, login_request: LoginRequest) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request).await
    }
}
