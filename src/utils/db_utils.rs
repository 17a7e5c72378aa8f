use chrono::NaiveDate;

/// SQL bindable value for dynamically assembled WHERE clauses.
#[derive(Debug)]
pub enum SqlValue {
    Text(String),
    Date(NaiveDate),
}

/// Appends inclusive date-range conditions to a WHERE fragment and pushes
/// the matching binds. The fragment must already open a WHERE clause
/// (" WHERE 1=1" when there is no other condition).
pub fn push_date_bounds(
    where_sql: &mut String,
    args: &mut Vec<SqlValue>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) {
    if let Some(start) = start_date {
        where_sql.push_str(" AND date >= ?");
        args.push(SqlValue::Date(start));
    }

    if let Some(end) = end_date {
        where_sql.push_str(" AND date <= ?");
        args.push(SqlValue::Date(end));
    }
}
