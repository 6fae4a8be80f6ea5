use jiff::civil::{Time, Weekday};
use serde::Deserialize;

use tollgrid_graph::edge::NodeId;

use crate::error::RecordError;

/// One traffic volume record between two toll locations, with per-category
/// vehicle counts.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TrafficRecord {
    pub id_1: NodeId,
    pub id_2: NodeId,
    pub route: String,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

/// One logged toll interval of a location pair, used for the weekly
/// coverage check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLogRecord {
    pub id: NodeId,
    pub id_2: NodeId,
    pub start_day: Weekday,
    pub start_time: Time,
    pub end_day: Weekday,
    pub end_time: Time,
}

/// Decodes an English day name such as "Monday".
pub fn weekday_from_name(name: &str) -> Result<Weekday, RecordError> {
    match name {
        "Monday" => Ok(Weekday::Monday),
        "Tuesday" => Ok(Weekday::Tuesday),
        "Wednesday" => Ok(Weekday::Wednesday),
        "Thursday" => Ok(Weekday::Thursday),
        "Friday" => Ok(Weekday::Friday),
        "Saturday" => Ok(Weekday::Saturday),
        "Sunday" => Ok(Weekday::Sunday),
        _ => Err(RecordError::InvalidDayName(name.to_string())),
    }
}
