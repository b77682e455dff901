//! Pairwise Pearson correlation between numeric columns.

use crate::data::numeric_values;
use crate::stats::calculator::StatsCalculator;
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `values[i][j]` is the correlation of column i with column j.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation matrix of the named columns. The diagonal is always 1.
    pub fn compute(df: &DataFrame, columns: &[String]) -> PolarsResult<Self> {
        let samples = columns
            .iter()
            .map(|name| numeric_values(df.column(name)?))
            .collect::<PolarsResult<Vec<_>>>()?;

        let n = columns.len();
        let mut values = vec![vec![1.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let r = StatsCalculator::pearson(&samples[i], &samples[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            columns: columns.to_vec(),
            values,
        })
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Cell text at the given decimal precision.
    pub fn label(&self, i: usize, j: usize, precision: usize) -> String {
        let v = self.values[i][j];
        if v.is_nan() {
            "NaN".to_string()
        } else {
            format!("{:.*}", precision, v)
        }
    }
}
