use rentalstat::{
    rank_by, CustomerType, IntoFrame, RecordLoader, RentalDashboard, RentalStatError,
};
use std::env;

const HOURS: &str = "instant;dteday;hr;season;weathersit;casual;registered;cnt
1;2011-01-01;0;1;1;3;13;16
2;2011-01-01;1;1;1;8;32;40
3;2011-01-01;2;1;1;5;27;32
4;2011-01-01;3;1;1;3;10;13
5;2011-01-01;4;1;1;0;1;1
6;2011-01-01;5;1;2;0;1;1
7;2011-01-02;0;1;2;4;13;17
";

fn main() -> Result<(), RentalStatError> {
    configure_polars_display();
    let store = RecordLoader::default().load_bytes(HOURS.as_bytes())?;
    let dashboard = RentalDashboard::new(store);

    let report = dashboard
        .run_aggregation()
        .start("2011-01-01")
        .end("2011-01-01")
        .call()?;
    println!("{:#?}", report.time_summary.to_frame()?);

    let busiest = rank_by(&report.time_summary, CustomerType::Registered);
    if let Some(hour) = busiest.first() {
        println!(
            "Busiest hour for registered riders: {} ({} rentals)",
            hour.timestamp, hour.registered_count
        );
    }

    println!("{}", report.to_json()?);
    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
