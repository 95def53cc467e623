//! Aggregate cleaning statistics.

use serde::{Deserialize, Serialize};

/// Response of `GET stats/overview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOverview {
    pub rooms_total: u32,
    pub zones_total: u32,
    pub zones_cleaned: u32,
    pub zones_due: u32,
}
