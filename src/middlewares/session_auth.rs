/*!
 * 会话认证中间件
 *
 * 从 `Authorization: Bearer <token>` 中解析会话令牌，查找未过期会话并将
 * 对应用户写入请求扩展。未携带令牌的请求按匿名放行，由后续中间件决定
 * 是否拒绝；携带了无效或过期令牌则直接返回 401。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * App::new()
 *     .wrap(SessionAuth)
 *     .route("/api/departments", web::get().to(list_departments))
 * ```
 */

use crate::models::common::response::ErrorBody;
use crate::models::users::entities::User;
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct SessionAuth;

impl SessionAuth {
    /// 从请求扩展中提取已认证用户
    pub fn authenticated_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(|t| t.to_string())
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 匿名请求放行，由需要认证的端点自行拒绝
            let Some(token) = bearer_token(&req) else {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            };

            let storage = req
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone();

            match storage.find_session_user(&token).await {
                Ok(Some(user)) => {
                    debug!("Session authentication successful for user: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Ok(None) => {
                    info!("Invalid or expired session token for {}", req.path());
                    Ok(req.into_response(
                        HttpResponse::Unauthorized()
                            .json(ErrorBody::new("Unauthorized: Invalid or expired token"))
                            .map_into_right_body(),
                    ))
                }
                Err(e) => {
                    Ok(req.into_response(e.to_response().map_into_right_body()))
                }
            }
        })
    }
}
