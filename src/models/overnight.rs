use serde::{Deserialize, Serialize};

/// What to do when the clock-out time is earlier than the clock-in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OvernightPolicy {
    /// Treat the shift as crossing midnight (24h modulus).
    #[default]
    Wrap,
    /// Refuse the shift.
    Reject,
}
