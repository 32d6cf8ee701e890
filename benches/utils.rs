use agclimate_analysis::DailySeries;
use chrono::NaiveDate;
use metfor::{Celsius, Fahrenheit, Mm};
use optional::{none, some, Optioned};
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

pub fn load_test_series() -> DailySeries {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push("davis_wy2021.csv");

    let mut f = File::open(&test_path).expect(&format!("Error opening file: {:#?}", test_path));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", test_path));

    let mut dates: Vec<NaiveDate> = vec![];
    let mut tmax: Vec<Optioned<Celsius>> = vec![];
    let mut tmin: Vec<Optioned<Celsius>> = vec![];
    let mut precip: Vec<Optioned<Mm>> = vec![];
    let mut eto: Vec<Optioned<Mm>> = vec![];

    for line in contents.lines() {
        if line.starts_with("### Analysis Int Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.len() < 5 {
            continue;
        }

        let date = match NaiveDate::from_str(tokens[0]) {
            Ok(date) => date,
            Err(_) => continue,
        };

        let temp = |tok: &str| -> Optioned<Celsius> {
            f64::from_str(tok)
                .ok()
                .map(|t| Celsius::from(Fahrenheit(t)))
                .map_or_else(none, some)
        };
        let depth =
            |tok: &str| -> Optioned<Mm> { f64::from_str(tok).ok().map(Mm).map_or_else(none, some) };

        dates.push(date);
        tmax.push(temp(tokens[1]));
        tmin.push(temp(tokens[2]));
        precip.push(depth(tokens[3]));
        eto.push(depth(tokens[4]));
    }

    DailySeries::new(dates)
        .expect("test data out of order")
        .with_max_temperature_profile(tmax)
        .with_min_temperature_profile(tmin)
        .with_precipitation_profile(precip)
        .with_reference_et_profile(eto)
}

/// A long synthetic sequence of hot/not-hot flags with runs of varying length.
#[allow(dead_code)]
pub fn make_flags(len: usize) -> Vec<bool> {
    (0..len).map(|i| (i * 7919 / 13) % 5 < 2).collect()
}
