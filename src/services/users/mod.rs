pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::storage::Storage;

pub struct UserService {
    storage: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 获取用户列表
    pub async fn list_users(&self) -> ActixResult<HttpResponse> {
        list::list_users(self).await
    }

    // 创建用户
    pub async fn create_user(&self, user_data: CreateUserRequest) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data).await
    }

    // 根据邮箱获取用户
    pub async fn get_user(&self, email: &str) -> ActixResult<HttpResponse> {
        get::get_user(self, email).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        email: &str,
        update_data: UpdateUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, email, update_data).await
    }

    // 删除用户
    pub async fn delete_user(&self, email: &str) -> ActixResult<HttpResponse> {
        delete::delete_user(self, email).await
    }
}
