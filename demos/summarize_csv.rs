use rentalstat::{CustomerType, IntoFrame, RentalDashboard, RentalStatError};
use std::env;

fn main() -> Result<(), RentalStatError> {
    configure_polars_display();
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/hour.csv".to_string());
    let dashboard = RentalDashboard::from_csv(&path)?;

    let report = dashboard
        .run_aggregation()
        .start("2011-01-01")
        .end("2011-03-31")
        .call()?;

    println!("{} buckets for {}", report.granularity, report.range);
    println!("{:#?}", report.time_summary.to_frame()?);
    println!("{:#?}", report.season_summary.to_frame()?);
    println!("{:#?}", report.weather_summary.to_frame()?);
    println!("{:#?}", report.totals.to_frame()?);
    println!(
        "Registered riders: {:.1}%",
        report.totals.share(CustomerType::Registered)
    );

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
