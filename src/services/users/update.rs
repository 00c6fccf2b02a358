use actix_web::{HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;
use crate::models::users::requests::UpdateUserRequest;
use crate::utils::validate::validate_email;

pub async fn update_user(
    service: &UserService,
    id: &str,
    data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref email) = data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ErrorBody::new(msg)));
    }

    match service.storage.update_user(id, data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(DataBody::new(user))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("User not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
