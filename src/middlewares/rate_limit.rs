/*!
 * 速率限制中间件
 *
 * 按调用方身份限制请求频率：已认证用户按角色取配额并以用户 ID 计数，
 * 匿名请求按客户端 IP 计数。计数缓存由中间件实例持有，在 `main` 中
 * 构造一次后克隆进各 worker（moka 的克隆共享同一存储）。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * let rate_limit = RateLimit::new(config.rate_limit.clone());
 *
 * HttpServer::new(move || {
 *     App::new()
 *         .wrap(rate_limit.clone())
 *         .wrap(SessionAuth)
 * })
 * ```
 *
 * 超过限制返回 429 Too Many Requests，并带 Retry-After 头。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::config::RateLimitConfig;
use crate::models::common::response::ErrorBody;
use crate::models::users::entities::{User, UserRole};

/// 速率限制中间件
#[derive(Clone)]
pub struct RateLimit {
    config: RateLimitConfig,
    /// 键: 身份标识，值: 窗口内请求计数
    counters: Cache<String, u32>,
}

impl RateLimit {
    pub fn new(config: RateLimitConfig) -> Self {
        let counters = Cache::builder()
            .time_to_live(Duration::from_secs(config.window_secs))
            .max_capacity(100_000)
            .build();
        Self { config, counters }
    }

    // 角色对应的窗口配额
    fn quota(&self, role: Option<UserRole>) -> u32 {
        match role {
            Some(UserRole::Admin) => self.config.admin,
            Some(UserRole::Teacher) => self.config.teacher,
            Some(UserRole::Student) => self.config.student,
            None => self.config.guest,
        }
    }
}

/// 从请求中提取客户端 IP
///
/// 安全注意事项：
/// - 如果服务部署在反向代理后面，需要在反向代理中配置正确的 X-Forwarded-For / X-Real-IP 头
/// - 此实现会验证 IP 格式，防止伪造的无效头导致问题
/// - 在不可信网络中直接暴露服务时，攻击者可能伪造转发头来绕过限制
fn extract_client_ip(req: &ServiceRequest) -> String {
    // 尝试从连接信息获取真实 IP（最可信）
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 从 X-Forwarded-For 头获取，只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ErrorBody::new("Too many requests, please try again later"))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limiter: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limiter: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let limiter = self.limiter.clone();

        Box::pin(async move {
            // 已认证用户以 "角色:用户ID" 计数，匿名请求以 IP 计数
            let (role, cache_key) = match req.extensions().get::<User>() {
                Some(user) => (Some(user.role), format!("{}:{}", user.role, user.id)),
                None => (None, format!("guest:{}", extract_client_ip(&req))),
            };

            let quota = limiter.quota(role);
            let current_count = limiter.counters.get(&cache_key).await.unwrap_or(0);

            if current_count >= quota {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, quota
                );
                return Ok(req.into_response(
                    create_rate_limit_response(limiter.config.window_secs).map_into_right_body(),
                ));
            }

            limiter
                .counters
                .insert(cache_key, current_count + 1)
                .await;

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RateLimitConfig {
        RateLimitConfig {
            window_secs: 60,
            admin: 100,
            teacher: 60,
            student: 60,
            guest: 30,
        }
    }

    #[test]
    fn test_role_quotas() {
        let limiter = RateLimit::new(config());
        assert_eq!(limiter.quota(Some(UserRole::Admin)), 100);
        assert_eq!(limiter.quota(Some(UserRole::Teacher)), 60);
        assert_eq!(limiter.quota(Some(UserRole::Student)), 60);
        assert_eq!(limiter.quota(None), 30);
    }

    #[tokio::test]
    async fn test_counter_shared_across_clones() {
        let limiter = RateLimit::new(config());
        let clone = limiter.clone();

        limiter.counters.insert("guest:1.2.3.4".to_string(), 5).await;
        assert_eq!(clone.counters.get("guest:1.2.3.4").await, Some(5));
    }
}
