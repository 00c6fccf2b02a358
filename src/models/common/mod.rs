//! 通用模型

pub mod pagination;
pub mod patch;
pub mod response;

pub use pagination::{PageParams, PaginatedData, PaginationInfo};
pub use response::{DataBody, ErrorBody};
