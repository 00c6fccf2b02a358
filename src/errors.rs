//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，并在 HTTP 边界统一映射为状态码与 `{error}` 响应体。

use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::common::response::ErrorBody;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(ClassroomError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    DatabaseConfig("E001", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E003", "Database Operation Error", INTERNAL_SERVER_ERROR),
    Validation("E004", "Validation Error", BAD_REQUEST),
    NotFound("E005", "Resource Not Found", NOT_FOUND),
    Conflict("E006", "Conflict", BAD_REQUEST),
    ReferentialBlock("E007", "Referential Integrity Block", BAD_REQUEST),
    CapacityExceeded("E008", "Capacity Exceeded", BAD_REQUEST),
    Authentication("E009", "Authentication Error", UNAUTHORIZED),
    Authorization("E010", "Authorization Error", FORBIDDEN),
    Serialization("E011", "Serialization Error", INTERNAL_SERVER_ERROR),
    ServiceUnavailable("E012", "Service Unavailable", SERVICE_UNAVAILABLE),
}

impl ClassroomError {
    /// 在 HTTP 边界统一映射为 `{error}` 响应
    ///
    /// 5xx 错误不向客户端泄露内部细节，仅写入日志。
    pub fn to_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{} {}: {}", self.code(), self.error_type(), self.message());
            HttpResponse::build(status).json(ErrorBody::new(self.error_type()))
        } else {
            HttpResponse::build(status).json(ErrorBody::new(self.message()))
        }
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassroomError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassroomError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ClassroomError {
    fn from(err: std::io::Error) -> Self {
        ClassroomError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassroomError::not_found("test").code(), "E005");
        assert_eq!(ClassroomError::conflict("test").code(), "E006");
        assert_eq!(ClassroomError::capacity_exceeded("test").code(), "E008");
        assert_eq!(ClassroomError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ClassroomError::not_found("x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ClassroomError::validation("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ClassroomError::conflict("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ClassroomError::referential_block("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ClassroomError::capacity_exceeded("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ClassroomError::authentication("x").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ClassroomError::authorization("x").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ClassroomError::service_unavailable("x").status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ClassroomError::database_operation("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassroomError::validation("Invalid ID");
        assert_eq!(err.message(), "Invalid ID");
    }

    #[test]
    fn test_format_simple() {
        let err = ClassroomError::conflict("Department with this code already exists");
        let formatted = err.format_simple();
        assert!(formatted.contains("Conflict"));
        assert!(formatted.contains("already exists"));
    }
}
