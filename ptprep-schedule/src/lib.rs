//! reading, merging and writing MATSim transit schedules and transit vehicle
//! fleets produced by independent GTFS conversions.
pub mod app;
pub mod io;
pub mod merge;
pub mod model;

#[cfg(test)]
pub(crate) mod test_fixtures;
