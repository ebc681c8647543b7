//! 路径参数提取器
//!
//! 在进入处理函数之前校验路径参数，失败时直接返回 400。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::errors::RegistryError;
use crate::utils::validate::normalize_email;

/// `{id}` 路径参数，必须是正整数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

/// `{email}` 路径参数，已规范化
#[derive(Debug, Clone)]
pub struct SafeEmail(pub String);

fn parse_record_id(raw: Option<&str>) -> Result<i64, RegistryError> {
    let raw = raw.ok_or_else(|| RegistryError::validation("Missing id in path"))?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RegistryError::validation(format!("Invalid id: {raw}"))),
    }
}

fn parse_email(raw: Option<&str>) -> Result<String, RegistryError> {
    let email = normalize_email(raw.unwrap_or_default());
    if email.is_empty() {
        return Err(RegistryError::validation("Missing email in path"));
    }
    Ok(email)
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            parse_record_id(req.match_info().get("id"))
                .map(SafeIDI64)
                .map_err(Into::into),
        )
    }
}

impl FromRequest for SafeEmail {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            parse_email(req.match_info().get("email"))
                .map(SafeEmail)
                .map_err(Into::into),
        )
    }
}
