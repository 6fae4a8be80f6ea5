use jiff::civil::{Time, Weekday};

use tollgrid_graph::{edge::TollEdge, resolver, threshold};
use tollgrid_rates::{
    rates,
    window::{self, RatedInterval},
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{} != {}",
        actual,
        expected
    );
}

#[test]
fn test_edge_list_to_windowed_rates() {
    let edges = vec![
        TollEdge::new(1001, 1002, 10.0),
        TollEdge::new(1002, 1003, 5.0),
    ];

    let matrix = resolver::resolve(&edges).unwrap();
    let pairs = matrix.unroll();
    assert_eq!(pairs.len(), 6);

    let rows = rates::base_rates(&pairs);
    let via_middle = rows
        .iter()
        .find(|row| row.id_start == 1001 && row.id_end == 1003)
        .unwrap();
    assert_eq!(via_middle.distance, 15.0);
    assert_eq!(via_middle.rates.car, 18.0);

    // Saturday afternoon, fully inside the peak bucket.
    let intervals: Vec<RatedInterval> = rows
        .iter()
        .map(|&row| {
            RatedInterval::new(
                row,
                6,
                Time::constant(10, 0, 0, 0),
                6,
                Time::constant(17, 30, 0, 0),
            )
        })
        .collect();

    let windowed = window::apply_time_windows(&intervals).unwrap();
    let adjusted = windowed
        .iter()
        .find(|row| row.id_start == 1001 && row.id_end == 1003)
        .unwrap();

    assert_eq!(adjusted.start_day, Weekday::Saturday);
    assert_close(adjusted.rates.car, 18.0 * 1.2 * 0.7);
    assert_close(adjusted.rates.truck, 15.0 * 3.6 * 1.2 * 0.7);
}

#[test]
fn test_threshold_over_unrolled_pairs() {
    let edges = vec![
        TollEdge::new(1, 2, 100.0),
        TollEdge::new(1, 3, 100.0),
        TollEdge::new(2, 3, 95.0),
    ];

    let pairs = resolver::resolve(&edges).unwrap().unroll();
    let matches = threshold::find_within_threshold(&pairs, 1);

    // Node 1 averages 100; both other nodes have pairs inside [90, 110].
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|row| row.id_start != 1));
    assert!(
        matches
            .iter()
            .all(|row| row.distance >= 90.0 && row.distance <= 110.0)
    );
}
