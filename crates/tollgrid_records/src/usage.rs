use fxhash::FxHashMap;

use crate::record::TrafficRecord;

/// Indexes of records whose bus volume exceeds twice the mean bus volume.
pub fn heavy_bus_indexes(records: &[TrafficRecord]) -> Vec<usize> {
    if records.is_empty() {
        return Vec::new();
    }

    let mean = records.iter().map(|record| record.bus).sum::<f64>() / records.len() as f64;

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.bus > 2.0 * mean)
        .map(|(index, _)| index)
        .collect()
}

/// Routes whose mean truck volume exceeds 7, sorted by name.
pub fn busy_truck_routes(records: &[TrafficRecord]) -> Vec<String> {
    let mut totals: FxHashMap<&str, (f64, usize)> = FxHashMap::default();
    for record in records {
        let entry = totals.entry(record.route.as_str()).or_insert((0.0, 0));
        entry.0 += record.truck;
        entry.1 += 1;
    }

    let mut routes: Vec<String> = totals
        .into_iter()
        .filter(|(_, (total, count))| total / *count as f64 > 7.0)
        .map(|(route, _)| route.to_string())
        .collect();
    routes.sort_unstable();

    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(route: &str, bus: f64, truck: f64) -> TrafficRecord {
        TrafficRecord {
            id_1: 1,
            id_2: 2,
            route: route.to_string(),
            moto: 0.0,
            car: 0.0,
            rv: 0.0,
            bus,
            truck,
        }
    }

    #[test]
    fn test_heavy_bus_indexes() {
        // Mean bus volume is 10, the cutoff 20.
        let records = vec![
            record("A", 5.0, 0.0),
            record("A", 25.0, 0.0),
            record("B", 0.0, 0.0),
            record("B", 10.0, 0.0),
        ];

        assert_eq!(heavy_bus_indexes(&records), vec![1]);
    }

    #[test]
    fn test_heavy_bus_cutoff_is_exclusive() {
        let records = vec![record("A", 10.0, 0.0), record("A", 20.0, 0.0)];

        // Mean 15, cutoff 30, nothing above it.
        assert!(heavy_bus_indexes(&records).is_empty());
    }

    #[test]
    fn test_heavy_bus_empty_records() {
        assert!(heavy_bus_indexes(&[]).is_empty());
    }

    #[test]
    fn test_busy_truck_routes_by_mean() {
        let records = vec![
            record("north", 0.0, 9.0),
            record("north", 0.0, 6.0),
            record("south", 0.0, 8.0),
            record("east", 0.0, 7.0),
        ];

        // north averages 7.5, south 8, east exactly 7 and stays out.
        assert_eq!(busy_truck_routes(&records), vec!["north", "south"]);
    }

    #[test]
    fn test_busy_truck_routes_sorted() {
        let records = vec![record("zulu", 0.0, 10.0), record("alpha", 0.0, 10.0)];

        assert_eq!(busy_truck_routes(&records), vec!["alpha", "zulu"]);
    }
}
