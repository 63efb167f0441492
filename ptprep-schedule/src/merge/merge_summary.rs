use super::EntityCounts;
use serde::Serialize;
use std::path::PathBuf;

/// the result of merging one feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedSummary {
    pub ordinal: usize,
    pub prefix: String,
    pub schedule_path: PathBuf,
    pub vehicles_path: PathBuf,
    pub merged: EntityCounts,
    pub dropped_vehicle_references: usize,
    pub skipped_transfer_times: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeSummary {
    pub feeds: Vec<FeedSummary>,
    pub totals: EntityCounts,
}

impl MergeSummary {
    pub fn push(&mut self, feed: FeedSummary) {
        self.totals += feed.merged;
        self.feeds.push(feed);
    }

    pub fn log(&self) {
        for feed in self.feeds.iter() {
            log::info!(
                "feed {} '{}' ({}): {} stops, {} lines, {} routes, {} departures, {} vehicle types, {} vehicles",
                feed.ordinal,
                feed.prefix,
                feed.schedule_path.display(),
                feed.merged.stops,
                feed.merged.lines,
                feed.merged.routes,
                feed.merged.departures,
                feed.merged.vehicle_types,
                feed.merged.vehicles
            );
        }
        log::info!(
            "merged {} feed(s): {} stops, {} lines, {} routes, {} departures, {} vehicles",
            self.feeds.len(),
            self.totals.stops,
            self.totals.lines,
            self.totals.routes,
            self.totals.departures,
            self.totals.vehicles
        );
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
