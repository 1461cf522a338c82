//! Closing stretches of the closing fixtures.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use trainlib::network::{Endpoint, Line, LineError, Station, StationId, StationStatus};
use trainlib::parse_lines;

fn lines() -> Vec<Line> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("closing.json");
    parse_lines(path).unwrap()
}

/// Load a fixture line with an observer recording each newly closed station.
fn observed(index: usize) -> (Line, Arc<Mutex<Vec<StationId>>>) {
    let mut line = lines().remove(index);
    let closed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&closed);
    line.set_observer(move |s: &Station, status: StationStatus| {
        if status == StationStatus::Closed {
            sink.lock().unwrap().push(s.id());
        }
    });
    (line, closed)
}

fn assert_closed(closed: &Arc<Mutex<Vec<StationId>>>, expected: &[usize]) {
    let mut got: Vec<usize> = closed.lock().unwrap().iter().map(|id| id.index()).collect();
    got.sort_unstable();
    assert_eq!(got, expected);
}

fn close(index: usize, from: &str, to: &str, expected: &[usize]) {
    let (mut line, closed) = observed(index);
    line.close_line(from, to).unwrap();
    assert_closed(&closed, expected);
}

#[test]
fn diamond_closures() {
    close(0, "s1", "t2", &[1, 3]);
    close(0, "s2", "t2", &[2, 3]);
    close(0, "t1", "s2", &[0, 2]);
    close(0, "t1", "t2", &[0, 1, 2, 3]);
}

#[test]
fn diamond_closures_reversed() {
    close(0, "t2", "s1", &[1, 3]);
    close(0, "t2", "s2", &[2, 3]);
    close(0, "s2", "t1", &[0, 2]);
    close(0, "t2", "t1", &[0, 1, 2, 3]);
}

#[test]
fn double_branch_closures() {
    close(1, "s1", "s3", &[1, 3]);
    close(1, "s2", "s3", &[2, 3]);
    close(1, "t1", "s2", &[0, 2]);
    close(1, "t1", "s3", &[0, 1, 2, 3]);
    close(1, "s1", "t3", &[1, 3, 5, 6]);
}

#[test]
fn closing_via_a_station() {
    let (mut line, closed) = observed(1);
    line.close_line_via("t1", "t3", "s2").unwrap();
    assert_closed(&closed, &[0, 2, 3, 5, 6]);
}

#[test]
fn closing_entire_lines() {
    let (mut line, closed) = observed(0);
    line.close_entire_line();
    assert_closed(&closed, &[0, 1, 2, 3]);

    let (mut line, closed) = observed(1);
    line.close_entire_line();
    assert_closed(&closed, &[0, 1, 2, 3, 4, 5, 6]);
    assert!(line.stations().iter().all(Station::is_closed));
}

#[test]
fn open_ended_closures_fail() {
    let (mut line, closed) = observed(1);
    let err = line.close_line("s1", Endpoint::Absent).unwrap_err();
    assert!(matches!(err, LineError::OpenEndedClosure { .. }));
    let err = line.close_line(Endpoint::Absent, "s1").unwrap_err();
    assert!(matches!(err, LineError::OpenEndedClosure { .. }));
    assert!(closed.lock().unwrap().is_empty());
}

#[test]
fn closing_twice_reports_once() {
    let (mut line, closed) = observed(0);
    line.close_line("t1", "t2").unwrap();
    let again = line.close_line("t2", "t1").unwrap();
    assert!(again.is_empty());
    assert_eq!(closed.lock().unwrap().len(), 4);
}

#[test]
fn reopening_after_closure() {
    let (mut line, _closed) = observed(1);
    line.close_line("t1", "t3").unwrap();
    let s3 = line.resolve_station("s3").unwrap();
    assert!(line.open_station(s3).unwrap());
    assert!(line.station(s3).unwrap().is_open());
    assert_eq!(line.closed_stations().len(), 5);
}
