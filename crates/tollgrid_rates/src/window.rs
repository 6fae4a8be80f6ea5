use jiff::civil::{Time, Weekday};
use serde::Deserialize;

use tollgrid_graph::edge::NodeId;

use crate::{
    error::RateError,
    rates::{TollRateRow, TollRates},
};

/// A fixed time-of-day interval with its rate multiplier. Bounds are
/// inclusive.
#[derive(Debug, Clone, Copy)]
pub struct TimeBucket {
    pub start: Time,
    pub end: Time,
    pub factor: f64,
}

/// The discount schedule over a day. Off-peak hours run at 0.8 and the
/// 10:00 to 18:00 peak at 1.2.
pub static DAY_BUCKETS: [TimeBucket; 3] = [
    TimeBucket {
        start: Time::constant(0, 0, 0, 0),
        end: Time::constant(10, 0, 0, 0),
        factor: 0.8,
    },
    TimeBucket {
        start: Time::constant(10, 0, 0, 0),
        end: Time::constant(18, 0, 0, 0),
        factor: 1.2,
    },
    TimeBucket {
        start: Time::constant(18, 0, 0, 0),
        end: Time::constant(23, 59, 59, 0),
        factor: 0.8,
    },
];

/// Rate multiplier for intervals starting on a weekend day.
pub const WEEKEND_FACTOR: f64 = 0.7;

/// The bucket fully containing `[start, end]`, if any. An interval spanning
/// more than one bucket matches none and keeps its base rates through the
/// time-of-day step.
pub fn matching_bucket(start: Time, end: Time) -> Option<&'static TimeBucket> {
    DAY_BUCKETS
        .iter()
        .find(|bucket| start >= bucket.start && end <= bucket.end)
}

/// Decodes an integer day code, 1 through 7 mapping Monday through Sunday.
pub fn weekday_from_code(code: u8) -> Result<Weekday, RateError> {
    match code {
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        7 => Ok(Weekday::Sunday),
        _ => Err(RateError::InvalidDayCode(code)),
    }
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Saturday | Weekday::Sunday)
}

/// A priced pair together with the raw day/time fields of its toll
/// interval. Day codes are 1 through 7, Monday through Sunday.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RatedInterval {
    pub id_start: NodeId,
    pub id_end: NodeId,
    pub distance: f64,
    pub start_day: u8,
    pub start_time: Time,
    pub end_day: u8,
    pub end_time: Time,
    #[serde(flatten)]
    pub rates: TollRates,
}

impl RatedInterval {
    /// Attaches day/time fields to an already priced row.
    pub fn new(
        row: TollRateRow,
        start_day: u8,
        start_time: Time,
        end_day: u8,
        end_time: Time,
    ) -> Self {
        RatedInterval {
            id_start: row.id_start,
            id_end: row.id_end,
            distance: row.distance,
            start_day,
            start_time,
            end_day,
            end_time,
            rates: row.rates,
        }
    }
}

/// A toll interval with decoded days and discounted rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowedTollRateRow {
    pub id_start: NodeId,
    pub id_end: NodeId,
    pub distance: f64,
    pub start_day: Weekday,
    pub start_time: Time,
    pub end_day: Weekday,
    pub end_time: Time,
    pub rates: TollRates,
}

/// Applies the time-of-day bucket factor and then the weekend factor to
/// every row, producing a new row per input row.
pub fn apply_time_windows(rows: &[RatedInterval]) -> Result<Vec<WindowedTollRateRow>, RateError> {
    rows.iter().map(windowed_row).collect()
}

fn windowed_row(row: &RatedInterval) -> Result<WindowedTollRateRow, RateError> {
    let start_day = weekday_from_code(row.start_day)?;
    let end_day = weekday_from_code(row.end_day)?;

    let mut rates = row.rates;
    if let Some(bucket) = matching_bucket(row.start_time, row.end_time) {
        rates = rates.scaled(bucket.factor);
    }
    if is_weekend(start_day) {
        rates = rates.scaled(WEEKEND_FACTOR);
    }

    Ok(WindowedTollRateRow {
        id_start: row.id_start,
        id_end: row.id_end,
        distance: row.distance,
        start_day,
        start_time: row.start_time,
        end_day,
        end_time: row.end_time,
        rates,
    })
}
