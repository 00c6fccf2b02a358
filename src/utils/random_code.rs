//! 随机码生成

use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 生成指定长度的随机码（小写字母与数字）
///
/// 用于班级邀请码，唯一性由数据库唯一约束兜底。
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(generate_random_code(7).len(), 7);
        assert_eq!(generate_random_code(0).len(), 0);
    }

    #[test]
    fn test_charset() {
        let code = generate_random_code(64);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_codes_differ() {
        // 36^32 的空间里碰撞视为 bug
        assert_ne!(generate_random_code(32), generate_random_code(32));
    }
}
