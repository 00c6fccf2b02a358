//! 请求参数解析错误处理

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::common::response::ErrorBody;

/// 查询参数反序列化失败时返回 400 `{error}`
pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> error::Error {
    tracing::debug!("Query param parse error on {}: {}", req.path(), err);
    let body = ErrorBody::new(format!("Invalid query parameters: {err}"));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// JSON 请求体反序列化失败时返回 400 `{error}`
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
    tracing::debug!("JSON body parse error on {}: {}", req.path(), err);
    let body = ErrorBody::new(format!("Invalid JSON body: {err}"));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
