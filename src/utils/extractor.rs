//! 路径参数提取器
//!
//! 路径中的数字 ID 解析失败时直接返回 400，处理函数拿到的始终是合法 ID。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error};
use futures_util::future::{Ready, ready};

use crate::models::common::response::ErrorBody;

/// `{id}` 路径段的安全 i64 提取器
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|s| s.trim().parse::<i64>().ok());

        match parsed {
            Some(id) => ready(Ok(SafeIdI64(id))),
            None => ready(Err(error::InternalError::from_response(
                "Invalid ID",
                HttpResponse::BadRequest().json(ErrorBody::new("Invalid ID")),
            )
            .into())),
        }
    }
}
