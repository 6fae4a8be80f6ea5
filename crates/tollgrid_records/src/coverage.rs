use std::collections::BTreeMap;

use jiff::civil::{Time, Weekday};

use tollgrid_graph::edge::NodeId;

use crate::record::TimeLogRecord;

const DAY_START: Time = Time::constant(0, 0, 0, 0);
const DAY_END: Time = Time::constant(23, 59, 59, 0);

struct PairCoverage {
    seen_days: [bool; 7],
    earliest_start: Time,
    latest_end: Time,
}

fn day_slot(day: Weekday) -> usize {
    match day {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    }
}

/// For every (id, id_2) pair, whether its log rows span all seven weekdays
/// and reach from midnight through 23:59:59.
pub fn weekly_coverage(records: &[TimeLogRecord]) -> BTreeMap<(NodeId, NodeId), bool> {
    let mut pairs: BTreeMap<(NodeId, NodeId), PairCoverage> = BTreeMap::new();

    for record in records {
        let entry = pairs
            .entry((record.id, record.id_2))
            .or_insert(PairCoverage {
                seen_days: [false; 7],
                earliest_start: record.start_time,
                latest_end: record.end_time,
            });
        entry.seen_days[day_slot(record.start_day)] = true;
        entry.earliest_start = entry.earliest_start.min(record.start_time);
        entry.latest_end = entry.latest_end.max(record.end_time);
    }

    pairs
        .into_iter()
        .map(|(pair, coverage)| {
            let complete = coverage.seen_days.iter().all(|&seen| seen)
                && coverage.earliest_start == DAY_START
                && coverage.latest_end == DAY_END;
            (pair, complete)
        })
        .collect()
}
