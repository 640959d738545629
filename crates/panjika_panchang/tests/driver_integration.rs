//! End-to-end driver runs against stub and analytic providers.

use std::cell::Cell;

use panjika_core::{
    AnalyticEphemeris, AstroTime, Body, BodyPosition, EngineError, Frame, MAX_JD_UT,
    PositionProvider,
};
use panjika_panchang::*;
use panjika_time::DateSpec;

/// Sun at 280 + d, Moon at 10 + 13 d on day d after 2025-01-01.
struct LinearStub;

impl PositionProvider for LinearStub {
    fn position(
        &self,
        time: AstroTime,
        body: Body,
        frame: Frame,
    ) -> Result<BodyPosition, EngineError> {
        assert_eq!(frame, Frame::Sidereal);
        let d = time.jd_ut() - 2_460_676.5;
        let (base, rate) = match body {
            Body::Sun => (280.0, 1.0),
            Body::Moon => (10.0, 13.0),
        };
        Ok(BodyPosition {
            longitude_deg: (base + rate * d).rem_euclid(360.0),
            speed_deg_per_day: rate,
        })
    }
}

/// Fails every query from `fail_from` onward and counts calls.
struct FailingStub {
    fail_from: f64,
    calls: Cell<usize>,
}

impl PositionProvider for FailingStub {
    fn position(
        &self,
        time: AstroTime,
        _body: Body,
        _frame: Frame,
    ) -> Result<BodyPosition, EngineError> {
        self.calls.set(self.calls.get() + 1);
        if time.jd_ut() >= self.fail_from {
            return Err(EngineError::EpochOutOfRange {
                jd_ut: time.jd_ut(),
            });
        }
        Ok(BodyPosition {
            longitude_deg: 0.0,
            speed_deg_per_day: 0.0,
        })
    }
}

#[test]
fn default_run_yields_ten_ordered_records() {
    let records = run_days(&LinearStub, &RunConfig::default()).expect("run");
    assert_eq!(records.len(), 10);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.jd, 2_460_676.5 + i as f64);
        assert_eq!(rec.date, format!("2025-01-{:02}T00:00:00", i + 1));
    }
}

#[test]
fn first_day_is_tithi_eight_in_ashwini() {
    let records = run_days(&LinearStub, &RunConfig::default()).expect("run");
    let first = &records[0];
    assert_eq!(first.sun_lon, 280.0);
    assert_eq!(first.moon_lon, 10.0);
    assert_eq!(first.tithi_index, 8);
    assert_eq!(first.nakshatra_index, 0);
}

#[test]
fn indices_stay_in_range() {
    let cfg = RunConfig {
        days: 60,
        ..RunConfig::default()
    };
    for rec in run_days(&LinearStub, &cfg).expect("run") {
        assert!((1..=30).contains(&rec.tithi_index), "{rec:?}");
        assert!(rec.nakshatra_index <= 26, "{rec:?}");
    }
}

#[test]
fn zero_days_is_empty_report() {
    let cfg = RunConfig {
        days: 0,
        ..RunConfig::default()
    };
    let records = run_days(&LinearStub, &cfg).expect("run");
    assert!(records.is_empty());
    assert_eq!(render_report(&records).expect("render"), "[]\n");
}

#[test]
fn provider_failure_aborts_without_partial_output() {
    let stub = FailingStub {
        fail_from: 2_460_676.5 + 4.0,
        calls: Cell::new(0),
    };
    let err = run_days(&stub, &RunConfig::default()).expect_err("should abort");
    assert!(matches!(
        err,
        PanchangError::Engine(EngineError::EpochOutOfRange { .. })
    ));
    // Four good days (two queries each) plus the failing Sun query.
    assert_eq!(stub.calls.get(), 9);
}

#[test]
fn compute_day_reports_iso_midnight() {
    let rec = compute_day(&LinearStub, &DateSpec::new(2025, 1, 3)).expect("day");
    assert_eq!(rec.date, "2025-01-03T00:00:00");
    assert_eq!(rec.jd, 2_460_678.5);
    assert_eq!(rec.sun_lon, 282.0);
    assert_eq!(rec.moon_lon, 36.0);
}

#[test]
fn analytic_run_for_early_january_2025() {
    let eph = AnalyticEphemeris::default();
    let records = run_days(&eph, &RunConfig::default()).expect("run");

    let tithis: Vec<u8> = records.iter().map(|r| r.tithi_index).collect();
    assert_eq!(tithis, (2..=11).collect::<Vec<u8>>());

    let nakshatras: Vec<u8> = records.iter().map(|r| r.nakshatra_index).collect();
    assert_eq!(nakshatras, vec![20, 21, 22, 23, 24, 25, 26, 0, 1, 2]);

    assert!((records[0].sun_lon - 256.61).abs() < 0.05);
    assert!((records[0].moon_lon - 269.71).abs() < 0.1);
}

#[test]
fn analytic_report_is_valid_json_array() {
    let eph = AnalyticEphemeris::default();
    let records = run_days(&eph, &RunConfig::default()).expect("run");
    let text = render_report(&records).expect("render");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 10);
    let mut keys: Vec<&str> = rows[0]
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["date", "jd", "moon_lon", "nakshatra_index", "sun_lon", "tithi_index"]
    );
}

#[test]
fn unbounded_day_count_ends_at_the_supported_range() {
    let cfg = RunConfig {
        start: DateSpec::new(2999, 12, 25),
        days: usize::MAX,
        ..RunConfig::default()
    };
    let err = run_days(&AnalyticEphemeris::default(), &cfg).expect_err("should stop");
    match err {
        PanchangError::Engine(EngineError::EpochOutOfRange { jd_ut }) => {
            assert_eq!(jd_ut, MAX_JD_UT + 1.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}
