//! Stats module - profiling, correlation, temporal trend and value counts

mod calculator;
mod categories;
mod correlation;
mod profiler;
mod temporal;

pub use categories::{top_values, CategoryCount};
pub use correlation::CorrelationMatrix;
pub use profiler::{describe, missing_counts, MissingCount, SummaryTable};
pub use temporal::{detect_trend, YearTrend};
