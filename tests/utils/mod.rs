use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use agclimate_analysis::{DailySeries, StationInfo};
use chrono::NaiveDate;
use metfor::{Celsius, Fahrenheit, Mm};
use optional::{none, some, Optioned};

pub mod index_tests;

/// Expected values parsed from the analysis sections of a test file.
pub struct Targets {
    pub ints: HashMap<String, i64>,
    pub floats: HashMap<String, Vec<f64>>,
    pub dates: HashMap<String, Vec<NaiveDate>>,
}

#[allow(unused_macros)] // False alarm
macro_rules! check_file_complete {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            let (series, targets) = utils::load_test_file($fname);

            assert!(series.validate().is_ok(), "Failed validation.");

            let ival_keys = [
                "num hot days",
                "num frost days",
                "num heatwaves",
                "longest heatwave",
            ];

            let fval_keys = ["total precipitation", "total reference et"];

            let dval_keys = [
                "heatwave starts",
                "last spring frost 2021",
                "first fall frost 2020",
                "degree day date 2021",
            ];

            // Make sure all of these keys are in the hashmaps
            for key in ival_keys.iter() {
                assert!(targets.ints.contains_key(*key), "{}", key);
            }

            for key in fval_keys.iter() {
                assert!(targets.floats.contains_key(*key), "{}", key);
            }

            for key in dval_keys.iter() {
                assert!(targets.dates.contains_key(*key), "{}", key);
            }

            // Make sure there are no extra keys in there being ignored.
            for key in targets.ints.keys() {
                assert!(ival_keys.contains(&key.as_str()), "extra ival key found");
            }

            for key in targets.floats.keys() {
                assert!(fval_keys.contains(&key.as_str()), "extra fval key found");
            }

            for key in targets.dates.keys() {
                assert!(dval_keys.contains(&key.as_str()), "extra dval key found");
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {

            use crate::utils;
            use agclimate_analysis::DailySeries;

            fn load_data() -> (DailySeries, utils::Targets) {
                utils::load_test_file($fname)
            }

            mod indexes {
                use super::load_data;
                use crate::utils::index_tests;

                #[test]
                fn hot_days() {
                    let (series, targets) = load_data();
                    index_tests::test_hot_days(&series, &targets);
                }

                #[test]
                fn frost_days() {
                    let (series, targets) = load_data();
                    index_tests::test_frost_days(&series, &targets);
                }

                #[test]
                fn heatwaves() {
                    let (series, targets) = load_data();
                    index_tests::test_heatwaves(&series, &targets);
                }

                #[test]
                fn frost_dates() {
                    let (series, targets) = load_data();
                    index_tests::test_frost_dates(&series, &targets);
                }

                #[test]
                fn degree_day_date() {
                    let (series, targets) = load_data();
                    index_tests::test_degree_day_date(&series, &targets);
                }

                #[test]
                fn totals() {
                    let (series, targets) = load_data();
                    index_tests::test_totals(&series, &targets);
                }
            }

            mod analysis {
                use super::load_data;
                use crate::utils::index_tests;

                #[test]
                fn full_analysis() {
                    let (series, targets) = load_data();
                    index_tests::test_full_analysis(series, &targets);
                }
            }
        }
    };
}

pub fn load_test_file(fname: &str) -> (DailySeries, Targets) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_series(&test_path)
}

fn parse_temperature(token: &str) -> Optioned<Celsius> {
    f64::from_str(token)
        .ok()
        .map(|t| Celsius::from(Fahrenheit(t)))
        .map_or_else(none, some)
}

fn parse_depth(token: &str) -> Optioned<Mm> {
    f64::from_str(token).ok().map(Mm).map_or_else(none, some)
}

fn load_test_csv_series(location: &PathBuf) -> (DailySeries, Targets) {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let lines: Vec<&str> = contents.split('\n').collect();
    let mut line_iter = lines.iter();

    //
    // Parse daily data
    //
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(lines.len());
    let mut tmax: Vec<Optioned<Celsius>> = Vec::with_capacity(lines.len());
    let mut tmin: Vec<Optioned<Celsius>> = Vec::with_capacity(lines.len());
    let mut precip: Vec<Optioned<Mm>> = Vec::with_capacity(lines.len());
    let mut eto: Vec<Optioned<Mm>> = Vec::with_capacity(lines.len());

    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Int Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').map(|t| t.trim()).collect();
        if tokens.len() < 5 {
            continue;
        }

        // Skips the header line
        let date = match NaiveDate::from_str(tokens[0]) {
            Ok(date) => date,
            Err(_) => continue,
        };

        dates.push(date);
        tmax.push(parse_temperature(tokens[1]));
        tmin.push(parse_temperature(tokens[2]));
        precip.push(parse_depth(tokens[3]));
        eto.push(parse_depth(tokens[4]));
    }

    let series = DailySeries::new(dates)
        .expect("test data out of order")
        .with_source_description(format!("{:?}", location))
        .with_station_info(
            StationInfo::new()
                .with_station(6)
                .with_name("Davis".to_owned())
                .with_lat_lon((38.536, -121.776)),
        )
        .with_max_temperature_profile(tmax)
        .with_min_temperature_profile(tmin)
        .with_precipitation_profile(precip)
        .with_reference_et_profile(eto);

    //
    // Integer values.
    //
    let mut ints = HashMap::new();
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Float Section ###") {
            break;
        }

        let tokens = tokenize(line);
        if tokens.len() < 2 {
            continue;
        }

        ints.insert(tokens[0].to_owned(), i64::from_str(&tokens[1]).unwrap());
    }

    // Float values.
    let mut floats = HashMap::new();
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Date Section ###") {
            break;
        }

        let tokens = tokenize(line);
        if tokens.is_empty() {
            continue;
        }

        let values = tokens
            .iter()
            .skip(1)
            .map(|token| f64::from_str(token).unwrap())
            .collect();
        floats.insert(tokens[0].to_owned(), values);
    }

    // Date values.
    let mut dates = HashMap::new();
    for line in line_iter.by_ref() {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            continue;
        }

        let values = tokens
            .iter()
            .skip(1)
            .map(|token| NaiveDate::from_str(token).unwrap())
            .collect();
        dates.insert(tokens[0].to_owned(), values);
    }

    (
        series,
        Targets {
            ints,
            floats,
            dates,
        },
    )
}

fn tokenize(line: &str) -> Vec<String> {
    line.split(',')
        .filter_map(|val| {
            let v = val.trim();
            if !v.is_empty() {
                Some(v.to_owned())
            } else {
                None
            }
        })
        .collect()
}

pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}
