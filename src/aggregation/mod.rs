//! The aggregation pipeline: bucket resolution, the time rollup and the
//! season, weather and rider-type reductions derived from it.

pub mod bucket;
pub mod error;
pub mod group;
pub mod ranking;
pub mod season;
pub mod time;
pub mod totals;
pub mod weather;
