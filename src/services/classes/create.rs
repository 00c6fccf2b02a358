use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::DataBody;
use crate::models::classes::requests::CreateClassRequest;

pub async fn create_class(
    service: &ClassService,
    data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    match service.storage.create_class(data).await {
        Ok(class) => {
            info!("Class created: {} (invite code: {})", class.id, class.invite_code);
            Ok(HttpResponse::Created().json(DataBody::new(class)))
        }
        Err(e) => Ok(e.to_response()),
    }
}
