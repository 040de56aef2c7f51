//! Human-readable rendering of lookup results.

use zipcast_core::{CurrentConditions, DailyForecast, FiveDayForecast};

pub fn current_conditions(conditions: &CurrentConditions) -> String {
    format!(
        "Current Temperature: {}\nCurrent Conditions: {}",
        conditions.temperature_f, conditions.weather_text
    )
}

pub fn five_day(forecast: &FiveDayForecast) -> String {
    let mut lines = vec!["5-Day Forecast".to_owned()];

    for (index, day) in forecast.days.iter().enumerate() {
        let label = day_label(index, day);
        lines.push(format!("{label}'s Low: {}", day.minimum_f));
        lines.push(format!("{label}'s High: {}", day.maximum_f));
    }

    lines.join("\n")
}

/// The first two days read as words, the rest as the month-day of the date.
fn day_label(index: usize, day: &DailyForecast) -> String {
    match index {
        0 => "Today".to_owned(),
        1 => "Tomorrow".to_owned(),
        _ => day.date.format("%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn day(date: &str, min: f64, max: f64) -> DailyForecast {
        DailyForecast {
            date: DateTime::parse_from_rfc3339(date).expect("test date must parse"),
            minimum_f: min,
            maximum_f: max,
        }
    }

    #[test]
    fn conditions_report_contains_exact_values() {
        let conditions = CurrentConditions {
            temperature_f: 73.4,
            weather_text: "Mostly cloudy".to_owned(),
        };

        let report = current_conditions(&conditions);

        assert_eq!(report, "Current Temperature: 73.4\nCurrent Conditions: Mostly cloudy");
    }

    #[test]
    fn forecast_report_lists_five_days_with_month_day_labels() {
        let forecast = FiveDayForecast {
            days: vec![
                day("2026-08-06T07:00:00-04:00", 63.5, 84.5),
                day("2026-08-07T07:00:00-04:00", 65.5, 86.5),
                day("2026-08-08T07:00:00-04:00", 66.5, 88.5),
                day("2026-08-09T07:00:00-04:00", 64.5, 85.5),
                day("2026-08-10T07:00:00-04:00", 61.5, 82.5),
            ],
        };

        let report = five_day(&forecast);

        let expected = "5-Day Forecast\n\
                        Today's Low: 63.5\n\
                        Today's High: 84.5\n\
                        Tomorrow's Low: 65.5\n\
                        Tomorrow's High: 86.5\n\
                        08-08's Low: 66.5\n\
                        08-08's High: 88.5\n\
                        08-09's Low: 64.5\n\
                        08-09's High: 85.5\n\
                        08-10's Low: 61.5\n\
                        08-10's High: 82.5";

        assert_eq!(report, expected);
    }

    #[test]
    fn month_day_label_matches_truncated_date() {
        // "2026-12-31T..." renders as the 5-character slice after the year.
        let entry = day("2026-12-31T07:00:00+02:00", 30.5, 40.5);

        assert_eq!(day_label(2, &entry), "12-31");
    }
}
