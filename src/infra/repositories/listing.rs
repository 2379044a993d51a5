//! Search / sort / paginate query construction shared by list endpoints.
//!
//! A listable entity says which columns the search text is matched against
//! and which column each of its sort keys orders by; everything else is
//! common. Unrecognized sort tokens add no ORDER BY at all.

use sea_orm::sea_query::{Expr, LikeExpr, Order, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

use super::entities::{department, employee};
use crate::domain::{DepartmentSort, EmployeeSort, ListQuery, SortDirection, SortKey};

/// An entity that can be listed with [`ListQuery`].
pub trait Listing: EntityTrait {
    type Sort: SortKey;

    /// Matches rows where any searchable column contains `text`.
    fn search_condition(text: &str) -> Condition;

    fn sort_column(sort: Self::Sort) -> Self::Column;

    /// Tie-breaker for rows with equal sort values
    fn id_column() -> Self::Column;
}

impl Listing for department::Entity {
    type Sort = DepartmentSort;

    fn search_condition(text: &str) -> Condition {
        Condition::any()
            .add(contains(department::Column::Name, text))
            .add(contains(department::Column::Location, text))
    }

    fn sort_column(sort: DepartmentSort) -> department::Column {
        match sort {
            DepartmentSort::Name => department::Column::Name,
            DepartmentSort::Location => department::Column::Location,
        }
    }

    fn id_column() -> department::Column {
        department::Column::Id
    }
}

impl Listing for employee::Entity {
    type Sort = EmployeeSort;

    fn search_condition(text: &str) -> Condition {
        Condition::any()
            .add(contains(employee::Column::FirstName, text))
            .add(contains(employee::Column::LastName, text))
    }

    fn sort_column(sort: EmployeeSort) -> employee::Column {
        match sort {
            EmployeeSort::Name => employee::Column::FirstName,
            EmployeeSort::HireDate => employee::Column::HireDate,
        }
    }

    fn id_column() -> employee::Column {
        employee::Column::Id
    }
}

/// Escape character for search patterns. Needs no quoting in any backend.
const LIKE_ESCAPE: char = '!';

/// `column LIKE '%text%'` with `%` and `_` in `text` matched literally.
fn contains<C: ColumnTrait>(column: C, text: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    Expr::col((column.entity_name(), column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

fn order_of(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

/// Rows matching the search text, unordered and unpaged. Used for totals.
pub fn filtered<E: Listing>(query: &ListQuery) -> Select<E> {
    let select = E::find();
    match query.search_text() {
        Some(text) => select.filter(E::search_condition(text)),
        None => select,
    }
}

/// One page of rows: filtered, then ordered, then offset/limited.
pub fn page_select<E: Listing>(query: &ListQuery) -> Select<E> {
    let mut select = filtered::<E>(query);

    if let Some(key) = query.sort_key::<E::Sort>() {
        select = select
            .order_by(E::sort_column(key), order_of(key.direction()))
            .order_by_asc(E::id_column());
    }

    let page = query.page_request();
    select.offset(page.offset()).limit(page.limit())
}
