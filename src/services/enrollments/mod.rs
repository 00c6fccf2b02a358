pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentListParams};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取选课记录列表
    pub async fn list_enrollments(&self, params: EnrollmentListParams) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, params).await
    }

    // 创建选课记录
    pub async fn create_enrollment(
        &self,
        data: CreateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, data).await
    }

    // 删除选课记录
    pub async fn delete_enrollment(&self, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_enrollment(self, id).await
    }
}
