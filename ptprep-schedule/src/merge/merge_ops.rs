use super::{FeedSummary, MergeError, MergeSummary, NamespaceRegistry, PrefixPolicy, ScheduleMerger};
use crate::{
    io::{read_schedule, read_vehicles, ScheduleIoError},
    model::{TransitSchedule, VehicleFleet},
};
use kdam::tqdm;
use std::path::PathBuf;

/// the two files of one feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedInput {
    pub schedule: PathBuf,
    pub vehicles: PathBuf,
}

/// the merged dataset, ready to be written
#[derive(Debug)]
pub struct MergeOutput {
    pub schedule: TransitSchedule,
    pub fleet: VehicleFleet,
    pub summary: MergeSummary,
}

/// reads and merges the feeds one at a time, in the order given. each feed
/// is dropped once it has been merged.
pub fn merge_feeds(inputs: &[FeedInput], policy: PrefixPolicy) -> Result<MergeOutput, MergeError> {
    let mut merger = ScheduleMerger::new();
    let mut registry = NamespaceRegistry::new(policy);
    let mut summary = MergeSummary::default();

    let feed_iter = tqdm!(
        inputs.iter().enumerate(),
        total = inputs.len(),
        desc = "merge feeds"
    );
    for (ordinal, input) in feed_iter {
        let read_error = |source: ScheduleIoError| MergeError::ReadError { ordinal, source };
        let schedule = read_schedule(&input.schedule).map_err(read_error)?;
        let fleet = read_vehicles(&input.vehicles).map_err(read_error)?;

        let prefix = registry.claim(&input.schedule, ordinal);
        log::debug!(
            "merging feed {ordinal} from {} with prefix '{prefix}'",
            input.schedule.display()
        );
        let outcome = merger.merge_feed(&prefix, &schedule, &fleet)?;
        summary.push(FeedSummary {
            ordinal,
            prefix,
            schedule_path: input.schedule.clone(),
            vehicles_path: input.vehicles.clone(),
            merged: outcome.merged,
            dropped_vehicle_references: outcome.dropped_vehicle_references,
            skipped_transfer_times: outcome.skipped_transfer_times,
        });
    }
    eprintln!();

    let (schedule, fleet) = merger.into_parts();
    Ok(MergeOutput {
        schedule,
        fleet,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{LineId, StopId},
        test_fixtures,
    };
    use std::path::Path;

    fn write_feed(dir: &Path, name: &str, schedule: &str, vehicles: &str) -> FeedInput {
        let feed_dir = dir.join(name);
        std::fs::create_dir_all(&feed_dir).unwrap();
        let input = FeedInput {
            schedule: feed_dir.join("transitSchedule.xml"),
            vehicles: feed_dir.join("transitVehicles.xml"),
        };
        std::fs::write(&input.schedule, schedule).unwrap();
        std::fs::write(&input.vehicles, vehicles).unwrap();
        input
    }

    #[test]
    fn test_feeds_are_namespaced_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            write_feed(
                dir.path(),
                "taipei-metro",
                test_fixtures::METRO_SCHEDULE,
                test_fixtures::METRO_VEHICLES,
            ),
            write_feed(
                dir.path(),
                "new taipei bus",
                test_fixtures::BUS_SCHEDULE,
                test_fixtures::BUS_VEHICLES,
            ),
        ];
        let output = merge_feeds(&inputs, PrefixPolicy::Disambiguated).unwrap();

        let prefixes = output
            .summary
            .feeds
            .iter()
            .map(|f| f.prefix.as_str())
            .collect::<Vec<_>>();
        assert_eq!(prefixes, vec!["taipei_metro", "new_taipei_bus"]);
        assert!(output.schedule.stop(&StopId::from("taipei_metro_BL01")).is_some());
        assert!(output.schedule.stop(&StopId::from("new_taipei_bus_BL01")).is_some());
        assert!(output.schedule.line(&LineId::from("new_taipei_bus_BL")).is_some());
        assert_eq!(output.summary.totals.departures, 4);
        assert_eq!(output.summary.feeds[0].dropped_vehicle_references, 1);
        assert_eq!(output.summary.feeds[1].skipped_transfer_times, 1);
    }

    #[test]
    fn test_copies_of_one_feed_merge_with_disambiguated_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let feed = write_feed(
            dir.path(),
            "metro",
            test_fixtures::METRO_SCHEDULE,
            test_fixtures::METRO_VEHICLES,
        );
        let inputs = vec![feed.clone(), feed];
        let output = merge_feeds(&inputs, PrefixPolicy::Disambiguated).unwrap();
        assert_eq!(output.summary.feeds[1].prefix, "metro1");
        assert_eq!(output.schedule.stop_count(), 6);
        assert!(output.schedule.stop(&StopId::from("metro1_BL01")).is_some());
    }

    #[test]
    fn test_nested_directory_names_merge_with_disambiguated_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            write_feed(
                dir.path(),
                "tpe",
                &test_fixtures::BUS_SCHEDULE.replace("\"S2\"", "\"bus_1\""),
                test_fixtures::BUS_VEHICLES,
            ),
            write_feed(
                dir.path(),
                "tpe_bus",
                &test_fixtures::BUS_SCHEDULE.replace("\"S2\"", "\"1\""),
                test_fixtures::BUS_VEHICLES,
            ),
        ];
        let output = merge_feeds(&inputs, PrefixPolicy::Disambiguated).unwrap();
        assert_eq!(output.summary.feeds[1].prefix, "tpebus1");
        assert!(output.schedule.stop(&StopId::from("tpe_bus_1")).is_some());
        assert!(output.schedule.stop(&StopId::from("tpebus1_1")).is_some());

        let result = merge_feeds(&inputs, PrefixPolicy::Derived);
        assert!(matches!(result, Err(MergeError::Collision { .. })));
    }

    #[test]
    fn test_copies_of_one_feed_collide_with_derived_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let feed = write_feed(
            dir.path(),
            "metro",
            test_fixtures::METRO_SCHEDULE,
            test_fixtures::METRO_VEHICLES,
        );
        let inputs = vec![feed.clone(), feed];
        let result = merge_feeds(&inputs, PrefixPolicy::Derived);
        assert!(matches!(result, Err(MergeError::Collision { .. })));
    }

    #[test]
    fn test_unreadable_feed_names_its_ordinal() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_feed(
            dir.path(),
            "metro",
            test_fixtures::METRO_SCHEDULE,
            test_fixtures::METRO_VEHICLES,
        );
        let broken = write_feed(dir.path(), "broken", "<transitSchedule>", "<vehicleDefinitions/>");
        let result = merge_feeds(&[good, broken], PrefixPolicy::Disambiguated);
        assert!(matches!(result, Err(MergeError::ReadError { ordinal: 1, .. })));
    }
}
