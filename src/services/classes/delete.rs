use actix_web::{HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::DataBody;
use crate::models::common::response::ErrorBody;

pub async fn delete_class(service: &ClassService, id: i64) -> ActixResult<HttpResponse> {
    match service.storage.delete_class(id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(DataBody::new(class))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorBody::new("Class not found"))),
        Err(e) => Ok(e.to_response()),
    }
}
