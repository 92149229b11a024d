pub mod granularity;
pub mod rental_record;
pub mod season;
pub mod summary;
pub mod traits;
pub mod weather_situation;
