use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STUDENT => Ok(UserRole::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: admin, teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 成员查询角色：限定范围内按何种身份聚合用户
//
// `role` 参数缺失或取值未知时走 Unscoped 路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Student,
    Teacher,
    Unscoped,
}

impl MemberRole {
    pub fn from_param(role: Option<&str>) -> Self {
        match role {
            Some("student") => MemberRole::Student,
            Some("teacher") => MemberRole::Teacher,
            _ => MemberRole::Unscoped,
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: Option<i64>,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for s in ["admin", "teacher", "student"] {
            let role: UserRole = s.parse().unwrap();
            assert_eq!(role.to_string(), s);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_member_role_dispatch() {
        assert_eq!(MemberRole::from_param(Some("student")), MemberRole::Student);
        assert_eq!(MemberRole::from_param(Some("teacher")), MemberRole::Teacher);
        assert_eq!(MemberRole::from_param(Some("admin")), MemberRole::Unscoped);
        assert_eq!(MemberRole::from_param(None), MemberRole::Unscoped);
    }
}
