use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::{PageParams, PageQuery};

// 选课列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub page: PageQuery,
    pub class_id: Option<String>,
}

// 选课创建请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub student_id: String,
    pub class_id: i64,
}

// 选课列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct EnrollmentListQuery {
    pub page: PageParams,
    pub class_id: Option<i64>,
}

impl From<&EnrollmentListParams> for EnrollmentListQuery {
    fn from(params: &EnrollmentListParams) -> Self {
        Self {
            page: PageParams::enrollment(
                params.page.page.as_deref(),
                params.page.limit.as_deref(),
            ),
            class_id: params.class_id.as_deref().and_then(|c| c.trim().parse().ok()),
        }
    }
}
