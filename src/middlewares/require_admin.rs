/*!
 * 管理员访问控制中间件
 *
 * 依赖 `SessionAuth` 先写入请求扩展中的用户信息：未认证返回 401，
 * 已认证但非管理员返回 403。用于写操作路由。
 */

use crate::models::common::response::ErrorBody;
use crate::models::users::entities::{User, UserRole};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

#[derive(Clone)]
pub struct RequireAdmin;

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminMiddleware<S>
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
            let role = req.extensions().get::<User>().map(|u| u.role);

            match role {
                Some(UserRole::Admin) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(_) => {
                    info!("Non-admin user attempted write access to {}", req.path());
                    Ok(req.into_response(
                        HttpResponse::Forbidden()
                            .json(ErrorBody::new("Forbidden: Admin access required"))
                            .map_into_right_body(),
                    ))
                }
                None => Ok(req.into_response(
                    HttpResponse::Unauthorized()
                        .json(ErrorBody::new("Unauthorized: Authentication required"))
                        .map_into_right_body(),
                )),
            }
        })
    }
}
