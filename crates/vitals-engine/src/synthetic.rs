use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vitals_types::{
    CronometerMetrics, GarminMetrics, ManualMetrics, OuraMetrics, Source, SourceMetrics,
    SourceRecord, StravaMetrics,
};

/// Generate plausible synthetic records for every source over a date range.
///
/// Output satisfies the same invariants as real connector data: at most one
/// record per (date, source), every field independently nullable, values
/// inside per-field plausible ranges, booleans never numeric. Deterministic
/// for a given seed so pipelines and tests are reproducible. Some sources
/// skip some days, mimicking devices that are not worn or logs not kept.
pub fn generate(start: NaiveDate, end: NaiveDate, seed: u64) -> Vec<SourceRecord> {
    let mut records = Vec::new();
    for source in Source::ALL {
        records.extend(generate_source(source, start, end, seed));
    }
    records.sort_by_key(|r| r.date);
    records
}

/// Generate synthetic records for a single source.
///
/// Seeded per source so that generating one source yields the same records
/// as generating all of them.
pub fn generate_source(
    source: Source,
    start: NaiveDate,
    end: NaiveDate,
    seed: u64,
) -> Vec<SourceRecord> {
    let mut rng = StdRng::seed_from_u64(seed ^ source_salt(source));
    let mut records = Vec::new();

    for date in start.iter_days().take_while(|d| *d <= end) {
        let metrics = match source {
            Source::Oura => oura_day(&mut rng),
            Source::Cronometer => cronometer_day(&mut rng),
            Source::Strava => strava_day(&mut rng),
            Source::Garmin => garmin_day(&mut rng),
            Source::Manual => manual_day(&mut rng),
        };
        if let Some(metrics) = metrics {
            records.push(SourceRecord::new(date, metrics));
        }
    }

    records
}

fn source_salt(source: Source) -> u64 {
    match source {
        Source::Oura => 0x6f75_7261,
        Source::Cronometer => 0x63_726f_6e6f,
        Source::Strava => 0x7374_7261,
        Source::Garmin => 0x6761_726d,
        Source::Manual => 0x6d61_6e75,
    }
}

// The ring is always worn.
fn oura_day(rng: &mut StdRng) -> Option<SourceMetrics> {
    let sleep_score = rng.gen_range(60..=100);
    Some(SourceMetrics::Oura(OuraMetrics {
        sleep_score: Some(sleep_score),
        sleep_duration_hours: Some(round1(rng.gen_range(6.0..10.0))),
        readiness_score: Some(rng.gen_range(60..=100)),
        activity_score: Some(rng.gen_range(55..=100)),
        steps: Some(rng.gen_range(2_000..=20_000)),
        sleep_heart_rate: Some(round1(rng.gen_range(44.0..60.0))),
        sleep_lowest_heart_rate: Some(rng.gen_range(40..=55)),
        sleep_hrv: Some(round1(rng.gen_range(30.0..110.0))),
    }))
}

fn cronometer_day(rng: &mut StdRng) -> Option<SourceMetrics> {
    // Logging lapses on roughly one day in ten.
    if rng.gen_bool(0.1) {
        return None;
    }
    Some(SourceMetrics::Cronometer(CronometerMetrics {
        calories: Some(round1(rng.gen_range(1_800.0..3_200.0))),
        protein: Some(round1(rng.gen_range(90.0..220.0))),
        carbs: Some(round1(rng.gen_range(150.0..450.0))),
        fat: Some(round1(rng.gen_range(40.0..120.0))),
    }))
}

fn strava_day(rng: &mut StdRng) -> Option<SourceMetrics> {
    // Run days only.
    if !rng.gen_bool(0.4) {
        return None;
    }
    let distance_km = round1(rng.gen_range(3.0..18.0));
    let pace_min_per_km = rng.gen_range(4.5..6.5);
    Some(SourceMetrics::Strava(StravaMetrics {
        total_distance_km: Some(distance_km),
        total_duration_hours: Some(round2(distance_km * pace_min_per_km / 60.0)),
    }))
}

fn garmin_day(rng: &mut StdRng) -> Option<SourceMetrics> {
    if rng.gen_bool(0.2) {
        return None;
    }
    let ran = rng.gen_bool(0.4);
    let distance_km = if ran {
        Some(round1(rng.gen_range(3.0..18.0)))
    } else {
        None
    };
    Some(SourceMetrics::Garmin(GarminMetrics {
        total_distance_km: distance_km,
        total_duration_hours: distance_km.map(|d| round2(d * 0.095)),
        steps: Some(rng.gen_range(2_000..=20_000)),
        resting_heart_rate: Some(rng.gen_range(42..=58)),
        hrv: Some(rng.gen_range(30..=110)),
        vo2_max: Some(round1(rng.gen_range(45.0..60.0))),
    }))
}

fn manual_day(rng: &mut StdRng) -> Option<SourceMetrics> {
    let bodyweight = rng.gen_bool(0.5).then(|| round1(rng.gen_range(72.0..86.0)));
    let lift = rng.gen_bool(0.6).then(|| rng.gen_bool(0.5));
    if bodyweight.is_none() && lift.is_none() {
        return None;
    }
    Some(SourceMetrics::Manual(ManualMetrics {
        bodyweight_kg: bodyweight,
        lift,
    }))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
