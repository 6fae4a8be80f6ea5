use std::path::Path;

use anyhow::Context;
use jiff::civil::Time;
use serde::Deserialize;

use tollgrid_graph::edge::{NodeId, TollEdge};
use tollgrid_rates::{rates::TollRates, window::RatedInterval};
use tollgrid_records::record::{TimeLogRecord, TrafficRecord, weekday_from_name};

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, anyhow::Error> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("decoding {}", path.display()))
}

pub fn read_edges(path: &Path) -> Result<Vec<TollEdge>, anyhow::Error> {
    read_rows(path)
}

pub fn read_traffic_records(path: &Path) -> Result<Vec<TrafficRecord>, anyhow::Error> {
    read_rows(path)
}

/// Schedule row: a pair's distance plus the day/time fields of its toll
/// interval. Day codes are 1-7.
#[derive(Deserialize)]
struct ScheduleRow {
    id_start: NodeId,
    id_end: NodeId,
    distance: f64,
    start_day: u8,
    start_time: Time,
    end_day: u8,
    end_time: Time,
}

pub fn read_schedule(path: &Path) -> Result<Vec<RatedInterval>, anyhow::Error> {
    let rows: Vec<ScheduleRow> = read_rows(path)?;
    Ok(rows
        .into_iter()
        .map(|row| RatedInterval {
            id_start: row.id_start,
            id_end: row.id_end,
            distance: row.distance,
            start_day: row.start_day,
            start_time: row.start_time,
            end_day: row.end_day,
            end_time: row.end_time,
            rates: TollRates::from_distance(row.distance),
        })
        .collect())
}

/// Time log row as stored in the source dataset, day columns carrying
/// English day names.
#[derive(Deserialize)]
struct TimeLogRow {
    id: NodeId,
    id_2: NodeId,
    start_day: String,
    start_time: Time,
    end_day: String,
    end_time: Time,
}

pub fn read_time_log(path: &Path) -> Result<Vec<TimeLogRecord>, anyhow::Error> {
    let rows: Vec<TimeLogRow> = read_rows(path)?;
    rows.into_iter()
        .map(|row| {
            Ok(TimeLogRecord {
                id: row.id,
                id_2: row.id_2,
                start_day: weekday_from_name(&row.start_day)?,
                start_time: row.start_time,
                end_day: weekday_from_name(&row.end_day)?,
                end_time: row.end_time,
            })
        })
        .collect::<Result<Vec<TimeLogRecord>, anyhow::Error>>()
        .with_context(|| format!("decoding day names in {}", path.display()))
}
