//! Run a sample trend analysis and print the response payload

use chrono::NaiveDate;
use trendkit::models::PriceSeries;
use trendkit::signals::TrendAnalyzer;

fn main() {
    let dates: Vec<NaiveDate> = (1..=10)
        .map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
        .collect();
    let prices = vec![
        100.0, 101.5, 99.8, 102.2, 103.1, 101.9, 104.5, 105.0, 103.8, 106.2,
    ];

    let series = PriceSeries::new(dates, prices).unwrap();
    let analysis = TrendAnalyzer::analyze("ACME Corp", &series, 3, 5, 2).unwrap();

    let json = serde_json::to_string_pretty(&analysis).unwrap();
    println!("Trend analysis:");
    println!("{}", json);
}
