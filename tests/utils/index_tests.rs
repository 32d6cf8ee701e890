use super::{approx_equal, Targets};
use agclimate_analysis::{
    analyze, degree_day_dates, frost_dates, frost_days, heatwaves, hot_days, total_precipitation,
    total_reference_et, DailySeries, SeriesIndex, Thresholds,
};
use chrono::NaiveDate;
use metfor::Quantity;

const EPS: f64 = 0.01;

fn target_date(targets: &Targets, key: &str) -> NaiveDate {
    targets.dates[key][0]
}

pub fn test_hot_days(series: &DailySeries, targets: &Targets) {
    let thresholds = Thresholds::default();
    let count = hot_days(series, thresholds.hot_day_max()).unwrap();
    assert_eq!(count as i64, targets.ints["num hot days"]);
}

pub fn test_frost_days(series: &DailySeries, targets: &Targets) {
    let thresholds = Thresholds::default();
    let count = frost_days(series, thresholds.frost_min()).unwrap();
    assert_eq!(count as i64, targets.ints["num frost days"]);
}

pub fn test_heatwaves(series: &DailySeries, targets: &Targets) {
    let thresholds = Thresholds::default();
    let waves = heatwaves(
        series,
        thresholds.hot_day_max(),
        thresholds.heatwave_min_days,
    )
    .unwrap();

    assert_eq!(waves.len() as i64, targets.ints["num heatwaves"]);

    let longest = waves.iter().map(|w| w.length).max().unwrap_or(0);
    assert_eq!(longest as i64, targets.ints["longest heatwave"]);

    let starts: Vec<NaiveDate> = waves.iter().map(|w| w.start).collect();
    assert_eq!(starts, targets.dates["heatwave starts"]);

    for wave in &waves {
        assert_eq!((wave.end - wave.start).num_days() + 1, wave.length as i64);
    }
}

pub fn test_frost_dates(series: &DailySeries, targets: &Targets) {
    let thresholds = Thresholds::default();
    let fd = frost_dates(series, thresholds.frost_min()).unwrap();

    // The water year spans parts of two calendar years.
    assert_eq!(fd.len(), 2);
    assert_eq!(fd[0].year, 2020);
    assert_eq!(fd[1].year, 2021);

    // October through December has no spring.
    assert!(fd[0].last_spring_frost.is_none());
    assert_eq!(
        fd[0].first_fall_frost.unwrap().date,
        target_date(targets, "first fall frost 2020")
    );

    assert_eq!(
        fd[1].last_spring_frost.unwrap().date,
        target_date(targets, "last spring frost 2021")
    );
    assert!(fd[1].first_fall_frost.is_none());
}

pub fn test_degree_day_date(series: &DailySeries, targets: &Targets) {
    let dd = degree_day_dates(series, &Thresholds::default()).unwrap();

    assert_eq!(
        dd,
        vec![
            (2020, None),
            (2021, Some(target_date(targets, "degree day date 2021")))
        ]
    );
}

pub fn test_totals(series: &DailySeries, targets: &Targets) {
    let precip = total_precipitation(series).unwrap().unpack();
    let eto = total_reference_et(series).unwrap().unpack();

    let target_precip = targets.floats["total precipitation"][0];
    let target_eto = targets.floats["total reference et"][0];

    assert!(
        approx_equal(precip, target_precip, EPS),
        "{} != {}",
        precip,
        target_precip
    );
    assert!(
        approx_equal(eto, target_eto, EPS),
        "{} != {}",
        eto,
        target_eto
    );
}

pub fn test_full_analysis(series: DailySeries, targets: &Targets) {
    let anal = analyze(series, &Thresholds::default()).unwrap();

    let int_checks = [
        (SeriesIndex::HotDays, "num hot days"),
        (SeriesIndex::FrostDays, "num frost days"),
        (SeriesIndex::Heatwaves, "num heatwaves"),
        (SeriesIndex::LongestHeatwave, "longest heatwave"),
    ];

    for &(idx, key) in int_checks.iter() {
        assert_eq!(
            anal.get_index(idx),
            Some(targets.ints[key] as f64),
            "{}",
            idx
        );
    }

    let float_checks = [
        (SeriesIndex::TotalPrecipitation, "total precipitation"),
        (SeriesIndex::TotalReferenceEt, "total reference et"),
    ];

    for &(idx, key) in float_checks.iter() {
        let val = anal.get_index(idx).unwrap();
        assert!(approx_equal(val, targets.floats[key][0], EPS), "{}", idx);
    }

    let starts: Vec<NaiveDate> = anal.heatwave_spells().iter().map(|w| w.start).collect();
    assert_eq!(starts, targets.dates["heatwave starts"]);

    assert_eq!(anal.frost_dates().len(), 2);
    assert_eq!(
        anal.degree_day_dates()[1],
        (2021, Some(target_date(targets, "degree day date 2021")))
    );

    assert_eq!(anal.series().station_info().name(), Some("Davis"));
}
