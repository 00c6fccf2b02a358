use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::services::UserService;

// HTTP处理程序
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    service.list_users(query.into_inner()).await
}

pub async fn create_user(
    service: web::Data<UserService>,
    data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    service.create_user(data.into_inner()).await
}

pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    service.get_user(&id).await
}

pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    service.update_user(&id, data.into_inner()).await
}

pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    service.delete_user(&id).await
}

// 配置路由：写操作需要管理员身份
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::get().to(list_users))
            .route(
                "",
                web::post().to(create_user).wrap(middlewares::RequireAdmin),
            )
            .route("/{id}", web::get().to(get_user))
            .route(
                "/{id}",
                web::patch().to(update_user).wrap(middlewares::RequireAdmin),
            )
            .route(
                "/{id}",
                web::delete().to(delete_user).wrap(middlewares::RequireAdmin),
            ),
    );
}
