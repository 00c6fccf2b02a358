//! 统一分页执行器
//!
//! 计数与取页共用同一个查询（同一份过滤条件），避免两者漂移。

use sea_orm::{ConnectionTrait, ItemsAndPagesNumber, PaginatorTrait, SelectorTrait};

use crate::errors::{ClassroomError, Result};
use crate::models::{PageParams, PaginationInfo};

/// 对任意可分页查询执行 计数 + 取页
///
/// `what` 用于错误信息（如 "班级"）。页码超出范围时返回空页。
pub(crate) async fn fetch_page<'db, C, S>(
    select: S,
    db: &'db C,
    page: &PageParams,
    what: &str,
) -> Result<(Vec<<S::Selector as SelectorTrait>::Item>, PaginationInfo)>
where
    C: ConnectionTrait,
    S: PaginatorTrait<'db, C>,
{
    let paginator = select.paginate(db, page.limit);

    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator
        .num_items_and_pages()
        .await
        .map_err(|e| ClassroomError::database_operation(format!("查询{what}总数失败: {e}")))?;

    let rows = paginator
        .fetch_page(page.page - 1)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("查询{what}列表失败: {e}")))?;

    Ok((
        rows,
        PaginationInfo::new(page, number_of_items, number_of_pages),
    ))
}
