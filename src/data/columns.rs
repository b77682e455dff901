//! Column classification and value extraction.
//!
//! Type inference is left to the CSV reader; this module maps the resulting
//! dtypes onto the three kinds the dashboards reason about.

use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    Temporal,
    Categorical,
}

impl ColumnKind {
    pub fn of(dtype: &DataType) -> Self {
        match dtype {
            DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => ColumnKind::Numeric,
            DataType::Date | DataType::Datetime(_, _) | DataType::Time => ColumnKind::Temporal,
            _ => ColumnKind::Categorical,
        }
    }
}

/// Names of the columns of a given kind, in table order.
pub fn columns_of_kind(df: &DataFrame, kind: ColumnKind) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| ColumnKind::of(col.dtype()) == kind)
        .map(|col| col.name().to_string())
        .collect()
}

/// Non-null values of a column as `f64`.
pub fn numeric_values(column: &Column) -> PolarsResult<Vec<f64>> {
    let floats = column.cast(&DataType::Float64)?;
    Ok(floats.f64()?.into_iter().flatten().collect())
}

/// Every cell of a column rendered as text, `None` for nulls.
pub fn text_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let text = column.cast(&DataType::String)?;
    let values = text
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    Ok(values)
}

/// Row-major text rendering of a frame, used for previews. Nulls render empty.
pub fn text_rows(df: &DataFrame) -> PolarsResult<Vec<Vec<String>>> {
    let columns = df
        .get_columns()
        .iter()
        .map(text_values)
        .collect::<PolarsResult<Vec<_>>>()?;

    let rows = (0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|values| values[row].clone().unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(ColumnKind::of(&DataType::Int64), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of(&DataType::Float32), ColumnKind::Numeric);
        assert_eq!(ColumnKind::of(&DataType::Date), ColumnKind::Temporal);
        assert_eq!(ColumnKind::of(&DataType::String), ColumnKind::Categorical);
        assert_eq!(ColumnKind::of(&DataType::Boolean), ColumnKind::Categorical);
    }

    #[test]
    fn test_columns_of_kind_keeps_order() {
        let df = df![
            "b" => [1.0, 2.0],
            "label" => ["x", "y"],
            "a" => [3i64, 4],
        ]
        .unwrap();
        assert_eq!(columns_of_kind(&df, ColumnKind::Numeric), vec!["b", "a"]);
        assert_eq!(columns_of_kind(&df, ColumnKind::Categorical), vec!["label"]);
    }

    #[test]
    fn test_text_rows_render_nulls_empty() {
        let df = df![
            "n" => [Some(1i64), None],
            "s" => [Some("a"), Some("b")],
        ]
        .unwrap();
        let rows = text_rows(&df).unwrap();
        assert_eq!(rows, vec![vec!["1".to_string(), "a".to_string()], vec![String::new(), "b".to_string()]]);
    }
}
