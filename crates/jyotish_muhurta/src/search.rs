//! The window search algorithm.

use jyotish_panchang::{Panchang, calculate_panchang};
use jyotish_time::Moment;
use jyotish_vedic::{Ayanamsha, YogaNature};

use crate::error::MuhurtaError;
use crate::rules::{EventKind, EventRules};
use crate::types::{MuhurtaSearch, MuhurtaWindow, Quality, SearchFilters};

/// Hard limit on the search span in days.
pub const MAX_RANGE_DAYS: f64 = 90.0;

/// Minimum usable clear window: 30 minutes, in days.
const MIN_WINDOW_DAYS: f64 = 30.0 / 1440.0;

/// Score bonus per hour of window duration.
const DURATION_BONUS_PER_HOUR: f64 = 2.0;

/// Find ranked auspicious windows for an event within a date range.
///
/// Fails with [`MuhurtaError::InvalidRange`] when the end precedes the
/// start or the span exceeds 90 days. Days whose panchang cannot be
/// computed are skipped, not fatal. Ranking is deterministic: score
/// descending, earlier start time breaking ties.
pub fn find_muhurta(
    event: EventKind,
    start_date: &Moment,
    end_date: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    filters: &SearchFilters,
    system: Ayanamsha,
) -> Result<MuhurtaSearch, MuhurtaError> {
    let start_jd = start_date.date_start().to_jd();
    let end_jd = end_date.date_start().to_jd();
    if end_jd < start_jd {
        return Err(MuhurtaError::InvalidRange("end date before start date"));
    }
    if end_jd - start_jd > MAX_RANGE_DAYS {
        return Err(MuhurtaError::InvalidRange("range exceeds 90 days"));
    }

    let rules = event.rules();
    let mut windows: Vec<MuhurtaWindow> = Vec::new();
    let candidate_cap = filters.max_results.saturating_mul(3);

    let mut day_jd = start_jd;
    while day_jd <= end_jd && windows.len() < candidate_cap {
        let date = Moment::from_jd(day_jd);
        match calculate_panchang(&date, latitude_deg, longitude_deg, system) {
            Ok(panchang) => {
                windows.extend(evaluate_day(&panchang, event, rules, filters));
            }
            Err(e) => {
                tracing::warn!(date = %date, error = %e, "skipping day in muhurta search");
            }
        }
        day_jd += 1.0;
    }

    // Deterministic ranking: score descending, then earlier start.
    windows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.start
                    .to_jd()
                    .partial_cmp(&b.start.to_jd())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    windows.truncate(filters.max_results);

    let best_window = windows.first().cloned();
    let total_found = windows.len();

    Ok(MuhurtaSearch {
        event,
        search_start: *start_date,
        search_end: *end_date,
        latitude_deg,
        longitude_deg,
        windows,
        total_found,
        best_window,
        filters: filters.clone(),
    })
}

/// Evaluate one day: base score from the rule tables, then one window per
/// clear daylight interval outside the blocked periods.
fn evaluate_day(
    panchang: &Panchang,
    event: EventKind,
    rules: &EventRules,
    filters: &SearchFilters,
) -> Vec<MuhurtaWindow> {
    let tithi_num = panchang.tithi.number;
    let nakshatra_num = panchang.nakshatra.number;

    if filters.exclude_tithis.contains(&tithi_num)
        || filters.exclude_nakshatras.contains(&nakshatra_num)
    {
        return Vec::new();
    }

    let mut score = 50.0;
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut warnings = Vec::new();

    if rules.good_tithis.contains(&tithi_num) {
        score += 10.0;
        positive.push(format!("Auspicious tithi: {}", panchang.tithi.tithi.name()));
    } else {
        score -= 10.0;
        negative.push(format!(
            "Tithi {} not ideal for this event",
            panchang.tithi.tithi.name()
        ));
    }

    if rules.good_nakshatras.contains(&nakshatra_num) {
        score += 15.0;
        positive.push(format!(
            "Auspicious nakshatra: {}",
            panchang.nakshatra.nakshatra.name()
        ));
    } else {
        score -= 10.0;
        negative.push(format!(
            "Nakshatra {} not ideal",
            panchang.nakshatra.nakshatra.name()
        ));
    }

    if rules.good_weekdays.contains(&panchang.vaar.index()) {
        score += 10.0;
        positive.push(format!("Favorable weekday: {}", panchang.vaar.name()));
    } else {
        score -= 5.0;
        negative.push(format!("{} not ideal for this event", panchang.vaar.name()));
    }

    if rules.avoid_yogas.contains(&panchang.yoga.yoga) {
        score -= 15.0;
        negative.push(format!("Inauspicious yoga: {}", panchang.yoga.yoga.name()));
    } else if panchang.yoga.nature == YogaNature::Auspicious {
        score += 10.0;
        positive.push(format!("Auspicious yoga: {}", panchang.yoga.yoga.name()));
    }

    if rules.avoid_masas.contains(&panchang.masa) {
        score -= 10.0;
        warnings.push(format!(
            "Lunar month {} generally avoided for this event",
            panchang.masa.name()
        ));
    }

    // Blocked sub-day intervals, as (start_jd, end_jd) sorted by start.
    let mut blocked: Vec<(f64, f64)> = Vec::with_capacity(3);
    if filters.avoid_rahu_kalam {
        blocked.push((
            panchang.rahu_kalam.start.to_jd(),
            panchang.rahu_kalam.end.to_jd(),
        ));
    }
    if filters.avoid_yamagandam {
        blocked.push((
            panchang.yamagandam.start.to_jd(),
            panchang.yamagandam.end.to_jd(),
        ));
    }
    blocked.push((
        panchang.gulika_kalam.start.to_jd(),
        panchang.gulika_kalam.end.to_jd(),
    ));
    blocked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let day_start = panchang.sun_timing.sunrise.to_jd();
    let day_end = panchang.sun_timing.sunset.to_jd();

    clear_intervals(day_start, day_end, &blocked)
        .into_iter()
        .filter(|(s, e)| e - s >= MIN_WINDOW_DAYS)
        .map(|(s, e)| {
            let duration_hours = (e - s) * 24.0;
            let window_score =
                (score + duration_hours * DURATION_BONUS_PER_HOUR).clamp(0.0, 100.0);
            MuhurtaWindow {
                start: Moment::from_jd(s),
                end: Moment::from_jd(e),
                score: window_score,
                quality: Quality::from_score(window_score),
                event,
                tithi: panchang.tithi.tithi,
                nakshatra: panchang.nakshatra.nakshatra,
                yoga: panchang.yoga.yoga,
                karana: panchang.karana.karana,
                vaar: panchang.vaar,
                positive_factors: positive.clone(),
                negative_factors: negative.clone(),
                warnings: warnings.clone(),
            }
        })
        .filter(|w| w.quality != Quality::Poor)
        .collect()
}

/// Subtract blocked periods from [day_start, day_end], producing the
/// disjoint clear sub-intervals in order.
fn clear_intervals(day_start: f64, day_end: f64, blocked: &[(f64, f64)]) -> Vec<(f64, f64)> {
    if blocked.is_empty() {
        return vec![(day_start, day_end)];
    }

    let mut clear = Vec::new();
    let mut cursor = day_start;

    for &(block_start, block_end) in blocked {
        if cursor < block_start {
            clear.push((cursor, block_start));
        }
        cursor = cursor.max(block_end);
    }
    if cursor < day_end {
        clear.push((cursor, day_end));
    }

    clear
}
