//! End-to-end properties of the public operations.

use jyotish_rs::*;

const DELHI_LAT: f64 = 28.6139;
const DELHI_LON: f64 = 77.209;

fn overlaps(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start < b_end && b_start < a_end
}

#[test]
fn marriage_windows_march_2026() {
    let start: Moment = "2026-03-01".parse().unwrap();
    let end: Moment = "2026-03-31".parse().unwrap();
    let search = find_windows(
        EventKind::Marriage,
        &start,
        &end,
        DELHI_LAT,
        DELHI_LON,
        &SearchFilters::default(),
    )
    .unwrap();

    assert!(!search.windows.is_empty(), "no windows found");
    assert!(search.windows.len() <= 20);

    for w in &search.windows {
        assert_ne!(w.quality, Quality::Poor, "poor window leaked: {w:?}");
        assert!((0.0..=100.0).contains(&w.score));

        // Each window must be disjoint from all three inauspicious
        // intervals of its own day.
        let day = calculate_daily_calendar(&w.start, DELHI_LAT, DELHI_LON).unwrap();
        let (ws, we) = (w.start.to_jd(), w.end.to_jd());
        for kalam in [&day.rahu_kalam, &day.yamagandam, &day.gulika_kalam] {
            assert!(
                !overlaps(ws, we, kalam.start.to_jd(), kalam.end.to_jd()),
                "window {}..{} overlaps {:?}",
                w.start,
                w.end,
                kalam.kind
            );
        }
    }
}

#[test]
fn windows_ranked_by_score_then_start() {
    let start: Moment = "2026-03-01".parse().unwrap();
    let end: Moment = "2026-03-31".parse().unwrap();
    let search = find_windows(
        EventKind::Marriage,
        &start,
        &end,
        DELHI_LAT,
        DELHI_LON,
        &SearchFilters::default(),
    )
    .unwrap();

    for pair in search.windows.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].start.to_jd() <= pair[1].start.to_jd());
        }
    }
    assert_eq!(search.best_window.as_ref(), search.windows.first());
}

#[test]
fn find_windows_rejects_inverted_range() {
    let start: Moment = "2026-03-31".parse().unwrap();
    let end: Moment = "2026-03-01".parse().unwrap();
    let err = find_windows(
        EventKind::Marriage,
        &start,
        &end,
        DELHI_LAT,
        DELHI_LON,
        &SearchFilters::default(),
    )
    .unwrap_err();
    assert!(matches!(err, JyotishError::InvalidRange(_)));
}

#[test]
fn find_windows_rejects_91_day_span() {
    let start: Moment = "2026-01-01".parse().unwrap();
    let end: Moment = "2026-04-02".parse().unwrap();
    let err = find_windows(
        EventKind::Marriage,
        &start,
        &end,
        DELHI_LAT,
        DELHI_LON,
        &SearchFilters::default(),
    )
    .unwrap_err();
    assert!(matches!(err, JyotishError::InvalidRange(_)));
}

#[test]
fn excluded_tithis_respected() {
    let start: Moment = "2026-03-01".parse().unwrap();
    let end: Moment = "2026-03-31".parse().unwrap();
    let baseline = find_windows(
        EventKind::Marriage,
        &start,
        &end,
        DELHI_LAT,
        DELHI_LON,
        &SearchFilters::default(),
    )
    .unwrap();

    // Excluding every tithi that appeared must remove those days.
    let mut exclude: Vec<u8> = Vec::new();
    for w in &baseline.windows {
        let day = calculate_daily_calendar(&w.start, DELHI_LAT, DELHI_LON).unwrap();
        if !exclude.contains(&day.tithi.number) {
            exclude.push(day.tithi.number);
        }
    }
    let filtered = find_windows(
        EventKind::Marriage,
        &start,
        &end,
        DELHI_LAT,
        DELHI_LON,
        &SearchFilters {
            exclude_tithis: exclude.clone(),
            ..Default::default()
        },
    )
    .unwrap();
    for w in &filtered.windows {
        let day = calculate_daily_calendar(&w.start, DELHI_LAT, DELHI_LON).unwrap();
        assert!(!exclude.contains(&day.tithi.number));
    }
}

#[test]
fn daily_calendar_repeat_calls_byte_identical() {
    let date: Moment = "2026-03-15".parse().unwrap();
    let a = calculate_daily_calendar(&date, DELHI_LAT, DELHI_LON).unwrap();
    let b = calculate_daily_calendar(&date, DELHI_LAT, DELHI_LON).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn chart_ketu_opposite_rahu_exactly() {
    let birth: Moment = "1985-11-02T04:15:00Z".parse().unwrap();
    let chart = calculate_chart(&birth, 13.0827, 80.2707, "lahiri").unwrap();
    let rahu = chart.graha(Graha::Rahu).unwrap();
    let ketu = chart.graha(Graha::Ketu).unwrap();
    let expected = (rahu.longitude_deg + 180.0).rem_euclid(360.0);
    assert_eq!(ketu.longitude_deg, expected);
    assert!(ketu.retrograde);
}

#[test]
fn chart_search_and_calendar_share_error_taxonomy() {
    let moment: Moment = "2026-03-01".parse().unwrap();
    // Polar latitude → Computation, never a panic.
    let err = calculate_chart(&moment, 80.0, 10.0, "lahiri").unwrap_err();
    assert!(matches!(err, JyotishError::Computation(_)));
    // Out-of-range coordinates → InvalidInput.
    let err = calculate_daily_calendar(&moment, 95.0, 10.0).unwrap_err();
    assert!(matches!(err, JyotishError::InvalidInput(_)));
}

#[test]
fn identical_charts_compatibility_floor() {
    let r = score_compatibility(1, 1, 1, 1).unwrap();
    assert!(!r.north.nadi_dosha);
    assert!(!r.north.bhakoot_dosha);
    assert!(r.north.total_points >= 30.0, "points = {}", r.north.total_points);
}

#[test]
fn identical_charts_same_factor_rows_max() {
    let r = score_compatibility(5, 3, 5, 3).unwrap();
    // Sameness-rewarding kootas at their maxima.
    let points: Vec<(&str, f64)> = r
        .north
        .kootas
        .iter()
        .map(|k| (k.name, k.points))
        .collect();
    for (name, max) in [("Vashya", 2.0), ("Graha Maitri", 5.0), ("Gana", 6.0), ("Bhakoot", 7.0)] {
        let found = points.iter().find(|(n, _)| *n == name).unwrap();
        assert_eq!(found.1, max, "{name}");
    }
}

#[test]
fn dasha_timeline_cycle_properties() {
    let birth: Moment = "1990-05-15T09:00:00Z".parse().unwrap();
    let chart = calculate_chart(&birth, DELHI_LAT, DELHI_LON, "lahiri").unwrap();
    let timeline = jyotish_kundali::dasha_timeline(&chart, 120.0);

    // Contiguity.
    for pair in timeline.windows(2) {
        assert_eq!(pair[0].end_jd, pair[1].start_jd);
    }

    // Sub-periods of each major period sum exactly to the parent.
    for parent in &timeline {
        let children = jyotish_vedic::sub_periods(parent);
        assert_eq!(children.len(), 9);
        let total: f64 = children.iter().map(|c| c.duration_days()).sum();
        assert!((total - parent.duration_days()).abs() < 1e-6);
    }
}

#[test]
fn transits_match_chart_positions() {
    let moment: Moment = "2024-06-01T00:00:00Z".parse().unwrap();
    let chart = calculate_chart(&moment, DELHI_LAT, DELHI_LON, "lahiri").unwrap();
    let transits = jyotish_kundali::transit_positions(&moment, Ayanamsha::Lahiri).unwrap();
    assert_eq!(chart.grahas, transits);
}
