use std::collections::BTreeMap;
use std::fmt;

use crate::record::TrafficRecord;

/// Congestion classes for car volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    /// Classifies a car volume: above 25 is high, above 15 medium, low
    /// otherwise. Both boundaries are exclusive.
    pub fn from_car_volume(volume: f64) -> Self {
        if volume > 25.0 {
            CongestionLevel::High
        } else if volume > 15.0 {
            CongestionLevel::Medium
        } else {
            CongestionLevel::Low
        }
    }
}

impl fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Number of records per congestion class, ordered by severity.
pub fn congestion_counts(records: &[TrafficRecord]) -> BTreeMap<CongestionLevel, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts
            .entry(CongestionLevel::from_car_volume(record.car))
            .or_insert(0) += 1;
    }
    counts
}
