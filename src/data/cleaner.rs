//! Row-wise missing value removal.

use polars::prelude::*;
use tracing::debug;

/// Drop every row that has a null in any column. Column set and row order
/// are unchanged.
pub fn clean(df: &DataFrame) -> PolarsResult<DataFrame> {
    let cleaned = df.drop_nulls::<String>(None)?;
    debug!(
        before = df.height(),
        after = cleaned.height(),
        "dropped rows with missing values"
    );
    Ok(cleaned)
}
