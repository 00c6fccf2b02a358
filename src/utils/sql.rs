//! SQL 片段安全处理

use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr, SimpleExpr};

/// 大小写不敏感的子串匹配条件
///
/// 列与模式两侧统一 `LOWER` 后再 `LIKE`；PostgreSQL 的 `LIKE` 区分大小写，
/// SQLite/MySQL 默认不区分，统一后三者行为一致。通配符已转义。
pub fn contains_insensitive<C: IntoSimpleExpr>(col: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like_pattern(&term.to_lowercase()));
    Expr::expr(Func::lower(col.into_simple_expr())).like(LikeExpr::new(pattern).escape('\\'))
}

/// 转义 LIKE 模式中的通配符
///
/// 用户输入作为 LIKE 模式的一部分时，`%`、`_` 与转义符本身需要先转义，
/// 配合查询侧的 `ESCAPE '\'` 使用。
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '%' | '_' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("mathematics"), "mathematics");
    }

    #[test]
    fn test_percent_escaped() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
    }

    #[test]
    fn test_underscore_escaped() {
        assert_eq!(escape_like_pattern("dept_name"), "dept\\_name");
    }

    #[test]
    fn test_backslash_escaped() {
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_mixed() {
        assert_eq!(escape_like_pattern("%_\\"), "\\%\\_\\\\");
    }

    #[test]
    fn test_contains_insensitive_lowers_both_sides() {
        use crate::entity::departments;
        use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

        let sql = departments::Entity::find()
            .filter(contains_insensitive(departments::Column::Name, "Math_"))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("LOWER("));
        assert!(sql.contains("%math\\_%"));
        assert!(sql.contains("ESCAPE"));
    }
}
