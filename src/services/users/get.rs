use actix_web::{HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;

pub async fn get_user(service: &UserService, id: &str) -> ActixResult<HttpResponse> {
    match service.storage.get_user_by_id(id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(DataBody::new(user))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("User not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
