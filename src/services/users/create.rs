use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;
use crate::models::users::requests::CreateUserRequest;
use crate::utils::validate::validate_email;

pub async fn create_user(
    service: &UserService,
    data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_email(&data.email) {
        return Ok(HttpResponse::BadRequest().json(ErrorBody::new(msg)));
    }

    match service.storage.create_user(data).await {
        Ok(user) => {
            info!("User created: {} ({})", user.id, user.email);
            Ok(HttpResponse::Created().json(DataBody::new(user)))
        }
        Err(e) => Ok(e.to_response()),
    }
}
