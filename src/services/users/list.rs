use actix_web::{HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::requests::{UserListParams, UserListQuery};

pub async fn list_users(service: &UserService, params: UserListParams) -> ActixResult<HttpResponse> {
    match service.storage.list_users(UserListQuery::from(&params)).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => Ok(e.to_response()),
    }
}
