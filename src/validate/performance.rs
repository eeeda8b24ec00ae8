use serde::{Deserialize, Serialize};
use tracing::warn;

/// An observed duration paired with the limit it must stay within, both in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationCheck {
    pub observed_ms: f64,
    pub max_ms: f64,
}

impl DurationCheck {
    #[must_use]
    pub const fn new(observed_ms: f64, max_ms: f64) -> Self {
        Self {
            observed_ms,
            max_ms,
        }
    }

    #[must_use]
    pub fn passes(&self) -> bool {
        meets_performance_thresholds(self.observed_ms, self.max_ms)
    }
}

/// `observed_ms <= threshold_ms`, or `false` when either input is negative
/// or not a number.
#[must_use]
pub fn meets_performance_thresholds(observed_ms: f64, threshold_ms: f64) -> bool {
    if observed_ms.is_nan() || threshold_ms.is_nan() {
        warn!(observed_ms, threshold_ms, "Duration check received NaN");
        return false;
    }
    if observed_ms < 0.0 || threshold_ms < 0.0 {
        warn!(
            observed_ms,
            threshold_ms, "Duration check received a negative value"
        );
        return false;
    }
    observed_ms <= threshold_ms
}
