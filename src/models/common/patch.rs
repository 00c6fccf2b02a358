//! PATCH 三态字段
//!
//! 可空字段在部分更新中有三种取值：缺省（不修改）、显式 `null`（清空）、
//! 具体值（覆盖）。`Option<String>` 无法区分前两者，统一用
//! `Option<Option<T>>` 配合本反序列化器表达。

use serde::{Deserialize, Deserializer};

/// 与 `#[serde(default)]` 搭配使用：键缺省为 `None`，
/// 显式 `null` 为 `Some(None)`，具体值为 `Some(Some(v))`
pub fn nullable_field<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use crate::models::departments::requests::UpdateDepartmentRequest;

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let absent: UpdateDepartmentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateDepartmentRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateDepartmentRequest =
            serde_json::from_str(r#"{"description": "新简介"}"#).unwrap();
        assert_eq!(set.description, Some(Some("新简介".to_string())));
    }
}
