//! 业务模型定义
//!
//! 按资源划分：entities 为业务实体，requests 为请求参数，responses 为响应结构。

pub mod classes;
pub mod common;
pub mod departments;
pub mod enrollments;
pub mod subjects;
pub mod system;
pub mod users;

pub use common::pagination::{PageParams, PaginatedData, PaginationInfo};
pub use common::response::{DataBody, ErrorBody};
