/// Skillguard version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest and highest rating a feedback entry can carry.
pub const MIN_FEEDBACK_VALUE: f64 = 0.0;
pub const MAX_FEEDBACK_VALUE: f64 = 100.0;

/// Decimal places kept on `FeedbackSummary::summary_value`.
pub const SUMMARY_DECIMALS: i32 = 2;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Weight assigned to an entry no mitigation has touched.
pub const NEUTRAL_WEIGHT: f64 = 1.0;
