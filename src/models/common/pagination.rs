use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 原始分页参数（来自查询字符串，宽松解析）
///
/// 客户端可能传非数字，统一按字符串接收后在 `PageParams` 中归一化。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// 归一化后的分页参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    /// 通用列表：limit 默认 10，上限 100
    pub fn general(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::normalize(page, limit, 10, 100)
    }

    /// 选课列表：limit 默认 100，上限 1000
    pub fn enrollment(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::normalize(page, limit, 100, 1000)
    }

    // 不可解析时回退默认值，page 至少为 1；limit 非正或不可解析时回退默认值，再截断到上限
    fn normalize(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u64,
        max_limit: u64,
    ) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1) as u64;
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
            .unwrap_or(default_limit as i64)
            .min(max_limit as i64) as u64;
        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl From<&PageQuery> for PageParams {
    fn from(q: &PageQuery) -> Self {
        Self::general(q.page.as_deref(), q.limit.as_deref())
    }
}

/// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationInfo {
    pub fn new(params: &PageParams, total: u64, total_pages: u64) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            total,
            total_pages,
        }
    }
}

/// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedData<T: TS> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T: TS> PaginatedData<T> {
    pub fn new(data: Vec<T>, pagination: PaginationInfo) -> Self {
        Self { data, pagination }
    }

    /// 保持分页信息不变，对每一行做转换
    pub fn map<U: TS>(self, f: impl FnMut(T) -> U) -> PaginatedData<U> {
        PaginatedData {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_defaults() {
        let p = PageParams::general(None, None);
        assert_eq!(p, PageParams { page: 1, limit: 10 });
    }

    #[test]
    fn test_unparsable_falls_back_to_defaults() {
        let p = PageParams::general(Some("abc"), Some("xyz"));
        assert_eq!(p, PageParams { page: 1, limit: 10 });
    }

    #[test]
    fn test_page_floor_is_one() {
        let p = PageParams::general(Some("0"), Some("10"));
        assert_eq!(p.page, 1);
        let p = PageParams::general(Some("-5"), Some("10"));
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_limit_clamped() {
        let p = PageParams::general(Some("1"), Some("500"));
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn test_non_positive_limit_falls_back_to_default() {
        let p = PageParams::general(Some("1"), Some("0"));
        assert_eq!(p.limit, 10);
        let p = PageParams::general(Some("1"), Some("-3"));
        assert_eq!(p.limit, 10);
        let p = PageParams::enrollment(Some("1"), Some("0"));
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn test_enrollment_limits() {
        let p = PageParams::enrollment(None, None);
        assert_eq!(
            p,
            PageParams {
                page: 1,
                limit: 100
            }
        );
        let p = PageParams::enrollment(Some("2"), Some("5000"));
        assert_eq!(p.limit, 1000);
    }

    #[test]
    fn test_offset() {
        let p = PageParams { page: 3, limit: 20 };
        assert_eq!(p.offset(), 40);
    }
}
