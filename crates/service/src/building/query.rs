//! Statement construction for the `building` table.
//!
//! Filtered listing appends one `<column> = $n` condition per set predicate,
//! visiting city, handover year and floors count in that order. The
//! placeholder number is always derived from the argument list length, so
//! `$n` binds the n-th argument.

use models::BuildingFilters;
use sea_orm::{DbBackend, Statement, Value};

use crate::errors::RepositoryError;

pub const GET_ALL_QUERY_PREFIX: &str =
    "SELECT id, name, city, handover_year, floors_count FROM building";

pub const INSERT_QUERY: &str = "INSERT INTO building (name, city, handover_year, floors_count) \
     VALUES ($1, $2, $3, $4) RETURNING id";

/// Parameterized SQL plus its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

impl BuiltQuery {
    pub fn into_statement(self) -> Statement {
        Statement::from_sql_and_values(DbBackend::Postgres, self.sql, self.args)
    }
}

/// Parallel condition and argument lists.
#[derive(Debug, Default)]
struct Conditions {
    conditions: Vec<String>,
    args: Vec<Value>,
}

impl Conditions {
    fn push_eq(&mut self, column: &str, value: Value) {
        self.args.push(value);
        self.conditions.push(format!("{column} = ${}", self.args.len()));
    }

    fn finish(self, prefix: &str) -> BuiltQuery {
        let mut sql = prefix.to_string();
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        BuiltQuery { sql, args: self.args }
    }
}

/// Postgres has no unsigned integers; attributes are stored as BIGINT.
pub fn to_bigint(column: &'static str, value: u64) -> Result<i64, RepositoryError> {
    i64::try_from(value).map_err(|_| RepositoryError::OutOfRange { column, value })
}

pub fn build_get_all_query(filters: &BuildingFilters) -> Result<BuiltQuery, RepositoryError> {
    let mut conds = Conditions::default();
    if let Some(city) = &filters.city {
        conds.push_eq("city", Value::from(city.clone()));
    }
    if let Some(year) = filters.handover_year {
        conds.push_eq("handover_year", Value::from(to_bigint("handover_year", year)?));
    }
    if let Some(floors) = filters.floors_count {
        conds.push_eq("floors_count", Value::from(to_bigint("floors_count", floors)?));
    }
    Ok(conds.finish(GET_ALL_QUERY_PREFIX))
}

pub fn build_insert_query(info: &models::BuildingInfo) -> Result<BuiltQuery, RepositoryError> {
    let args = vec![
        Value::from(info.name().to_string()),
        Value::from(info.city().to_string()),
        Value::from(to_bigint("handover_year", info.handover_year())?),
        Value::from(to_bigint("floors_count", info.floors_count())?),
    ];
    Ok(BuiltQuery { sql: INSERT_QUERY.to_string(), args })
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::BuildingInfo;

    fn placeholders(sql: &str) -> Vec<usize> {
        sql.split('$')
            .skip(1)
            .map(|rest| {
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn no_filters_omit_where() {
        let q = build_get_all_query(&BuildingFilters::default()).unwrap();
        assert_eq!(q.sql, GET_ALL_QUERY_PREFIX);
        assert!(q.args.is_empty());
        assert!(!q.sql.contains("WHERE"));
    }

    #[test]
    fn city_only() {
        let q = build_get_all_query(&BuildingFilters::default().with_city("Berlin")).unwrap();
        assert_eq!(q.sql, format!("{GET_ALL_QUERY_PREFIX} WHERE city = $1"));
        assert_eq!(q.args, vec![Value::from("Berlin".to_string())]);
    }

    #[test]
    fn later_field_takes_first_placeholder_when_earlier_unset() {
        let q = build_get_all_query(&BuildingFilters::default().with_floors_count(12)).unwrap();
        assert_eq!(q.sql, format!("{GET_ALL_QUERY_PREFIX} WHERE floors_count = $1"));
        assert_eq!(q.args, vec![Value::from(12i64)]);
    }

    #[test]
    fn year_and_floors_keep_field_order() {
        let f = BuildingFilters::new(None, Some(2025), Some(12));
        let q = build_get_all_query(&f).unwrap();
        assert_eq!(
            q.sql,
            format!("{GET_ALL_QUERY_PREFIX} WHERE handover_year = $1 AND floors_count = $2")
        );
        assert_eq!(q.args, vec![Value::from(2025i64), Value::from(12i64)]);
    }

    #[test]
    fn all_filters() {
        let f = BuildingFilters::new(Some("Berlin".into()), Some(2025), Some(12));
        let q = build_get_all_query(&f).unwrap();
        assert_eq!(
            q.sql,
            format!(
                "{GET_ALL_QUERY_PREFIX} WHERE city = $1 AND handover_year = $2 AND floors_count = $3"
            )
        );
        assert_eq!(
            q.args,
            vec![Value::from("Berlin".to_string()), Value::from(2025i64), Value::from(12i64)]
        );
    }

    #[test]
    fn placeholders_align_with_arguments_for_every_subset() {
        for mask in 0u8..8 {
            let f = BuildingFilters::new(
                (mask & 1 != 0).then(|| "Berlin".to_string()),
                (mask & 2 != 0).then_some(2025),
                (mask & 4 != 0).then_some(0),
            );
            let q = build_get_all_query(&f).unwrap();
            let set = mask.count_ones() as usize;
            assert_eq!(q.args.len(), set, "mask {mask}");
            assert_eq!(placeholders(&q.sql), (1..=set).collect::<Vec<_>>(), "mask {mask}");
            assert_eq!(q.sql.matches(" AND ").count(), set.saturating_sub(1), "mask {mask}");
            assert_eq!(q.sql.contains(" WHERE "), set > 0, "mask {mask}");
        }
    }

    #[test]
    fn zero_valued_filter_is_bound() {
        let q = build_get_all_query(&BuildingFilters::default().with_handover_year(0)).unwrap();
        assert_eq!(q.sql, format!("{GET_ALL_QUERY_PREFIX} WHERE handover_year = $1"));
        assert_eq!(q.args, vec![Value::from(0i64)]);
    }

    #[test]
    fn values_are_never_interpolated() {
        let hostile = "x'; DROP TABLE building; --";
        let q = build_get_all_query(&BuildingFilters::default().with_city(hostile)).unwrap();
        assert!(!q.sql.contains(hostile));
        assert_eq!(q.args, vec![Value::from(hostile.to_string())]);
    }

    #[test]
    fn oversized_filter_is_rejected() {
        let err = build_get_all_query(&BuildingFilters::default().with_floors_count(u64::MAX))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::OutOfRange { column: "floors_count", .. }));
    }

    #[test]
    fn insert_binds_four_values_in_column_order() {
        let q = build_insert_query(&BuildingInfo::new("Tower A", "Berlin", 2025, 12)).unwrap();
        assert_eq!(q.sql, INSERT_QUERY);
        assert_eq!(
            q.args,
            vec![
                Value::from("Tower A".to_string()),
                Value::from("Berlin".to_string()),
                Value::from(2025i64),
                Value::from(12i64),
            ]
        );
        assert_eq!(placeholders(&q.sql), vec![1, 2, 3, 4]);
    }

    #[test]
    fn insert_rejects_oversized_year() {
        let info = BuildingInfo::new("Future", "Berlin", u64::MAX, 1);
        assert!(matches!(
            build_insert_query(&info),
            Err(RepositoryError::OutOfRange { column: "handover_year", value: u64::MAX })
        ));
    }
}
